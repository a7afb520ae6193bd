//! Request handlers for the relay endpoints.

pub mod health;
pub mod intake;

pub use health::{health_status, ping};
pub use intake::{banner, submit_lead};
