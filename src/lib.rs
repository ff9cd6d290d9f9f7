//! Break-even and resource comparison between reusable screens and
//! textile or disposable barriers.
//!
//! The [`domain`] module holds the pure calculation core. The [`infra`] module
//! loads optional overrides for the cost and resource tables.

pub mod domain;
pub mod infra;
