//! # Overlay Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks for the identity hot paths
//! │   └── peer_identity.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── backend_properties.rs
//!     ├── config_selection.rs
//!     └── identity_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p overlay-tests
//!
//! # By category
//! cargo test -p overlay-tests integration::
//!
//! # Benchmarks
//! cargo bench -p overlay-tests
//! ```

pub mod benchmarks;
pub mod integration;
