pub mod chain;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod refi;
pub mod routes;

pub use errors::{RefiError, RefiResult};
pub use refi::{Protocol, ReFi};
