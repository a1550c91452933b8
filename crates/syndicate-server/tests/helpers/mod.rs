//! Test helpers para syndicate-server.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod client;
pub mod feed;

pub use assertions::*;
pub use client::{TestClient, TestResponse, client, client_with};
pub use feed::{StubFeed, sample_records};
