//! # Overlay Benchmarks
//!
//! Criterion benchmarks for the identity hot paths: routing-table bucket
//! selection and handshake signing.

pub mod peer_identity;
