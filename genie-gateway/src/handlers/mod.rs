//! HTTP handlers for genie-gateway.

pub mod genie;
pub mod health;

pub use genie::genie_get;
pub use health::health_check;
