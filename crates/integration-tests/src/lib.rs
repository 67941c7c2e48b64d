//! Integration tests for the ShareBite backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB and the server
//! cargo run -p sharebite-server
//!
//! # Run integration tests
//! cargo test -p sharebite-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `listing_lifecycle` - The full register → donate → claim → delete flow
//! - `session_auth` - Cookie issuance, logout, and guard enforcement
//!
//! Tests are `#[ignore]`d by default because they require a running server
//! (default `http://localhost:5000`, override with `SHAREBITE_BASE_URL`)
//! backed by a reachable MongoDB.
