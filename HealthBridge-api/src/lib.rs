// HealthBridge-api lib.rs
//
// Local HTTP surface over the HealthBridge gateway: field catalog,
// normalized values, initialization and permissions.

// Public modules
pub mod api;
pub mod demo;
pub mod entities;
pub mod openapi;
