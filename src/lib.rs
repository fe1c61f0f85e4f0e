pub mod artifacts;
pub mod config;
pub mod observability;
pub mod tracking;
pub mod transfer;
