// Public API entities
//
// Request and response shapes of the HTTP surface. Domain types are mapped
// into these so the wire format stays stable.

pub mod common;
pub mod fields;
pub mod platform;
pub mod values;
