//! Durable persistence adapters for the history store port.

pub mod file_store;
