//! ShareBite Core - Shared domain types.
//!
//! This crate provides the types shared between the ShareBite components:
//! - `server` - Food-donation API (listings, claim requests, users)
//! - `integration-tests` - End-to-end tests against a running stack
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes and enumerations (emails, food status)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
