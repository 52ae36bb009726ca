//! # yc-core
//!
//! Core definitions shared by the yieldcurve workspace: the error hierarchy,
//! the `ensure!` / `ensure_post!` / `fail!` macros, process-wide `Settings`,
//! and a handful of primitive aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
