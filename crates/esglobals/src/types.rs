//! Shared type definitions for the esglobals crate
//!
//! This module contains common aliases that are used across multiple
//! components of the formatter, ensuring consistency and deterministic
//! iteration order.

/// An `IndexSet` using the fast FxHash hasher.
///
/// Insertion order is preserved, which keeps generated namespace-creation
/// statements in first-touch order across runs.
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
