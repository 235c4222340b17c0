//! # navhub core
//!
//! Shared, I/O-free logic for navhub: navigation models and shape
//! validation, the bundled catalog, the search/filter pipeline, grouping,
//! and view selection state.
//!
//! This crate contains no tokio, reqwest, or filesystem dependencies, so it
//! can be reused by any frontend (native or `wasm32-unknown-unknown`).

pub mod catalog;
pub mod group;
pub mod models;
pub mod search;
pub mod view;
