//! Room availability prompts: a notification facade over a modal library, the
//! date-range availability workflow built on it, and the server endpoint it talks to.

pub mod availability;
pub mod config;
pub mod errors;
pub mod notify;
pub mod server;
pub mod templates_structs;
