//! thyrocalc-core
//!
//! Pure domain types and dosing configuration. No rule logic lives here;
//! this is the shared vocabulary between the engine, the report renderer
//! and whatever UI collects the patient profile.

pub mod config;
pub mod error;
pub mod models;
