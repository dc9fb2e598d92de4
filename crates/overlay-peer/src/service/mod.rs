//! # Identity Service
//!
//! Wires one hash policy and one signature backend, both fixed for the
//! service's lifetime, to the domain identity types.

// Semantic submodules
mod api;
mod core;

// Re-export public API
pub use self::core::IdentityService;
