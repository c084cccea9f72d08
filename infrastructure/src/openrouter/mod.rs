//! OpenRouter adapter for the completion gateway port.

pub mod gateway;
pub mod protocol;
