//! # Base types for parkchess
//!
//! This is an auxiliary crate for `parkchess`, which contains the core vocabulary: squares,
//! colors, pieces and the packed cell representation. It was split from the main crate so
//! front-ends can depend on the vocabulary without pulling in the engine.
//!
//! Normally you don't want to use this crate directly. Use `parkchess` instead.

pub mod geometry;
pub mod types;
