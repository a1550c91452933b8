//! HTTP handlers.

pub mod cache;
pub mod health;
pub mod menu;
pub mod metrics;
