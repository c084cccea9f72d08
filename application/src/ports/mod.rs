//! Port definitions (interfaces to the outside world)
//!
//! Ports are implemented by adapters in the infrastructure layer and
//! injected into use cases as trait objects.

pub mod completion_gateway;
pub mod history_store;
