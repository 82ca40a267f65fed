pub mod fields;
pub mod health;
pub mod platform;
pub mod values;
