//! Application use cases

pub mod chat_session;
