pub mod assessment;
pub mod patient;
pub mod result;
pub mod suppression;
pub mod tablet;
