//! # statkit
//!
//! Elementary numeric aggregates for slices of `f64`.
//!
//! This crate provides three aggregate functions — [`sum`], [`average`], and
//! [`median`] — with an explicit error contract for empty input. It knows
//! nothing about where the numbers come from: no I/O, no configuration, no
//! consumer domain.
//!
//! ## Modules
//!
//! - [`stats`] — the aggregate functions, the [`StatsError`] type, and the
//!   [`PI`] convenience constant
//!
//! ## Design Philosophy
//!
//! - **Explicit degenerate cases**: an empty slice is a valid input to `sum`
//!   (yielding 0) but a rejected input to `average` and `median` — division
//!   by zero is never allowed to silently produce NaN
//! - **Callers keep their data**: every function borrows its input read-only;
//!   `median` sorts a private copy
//! - **Property-based testing**: mathematical invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use statkit::{sum, average, median, PI};
//!
//! let numbers = [1.0, 2.0, 4.0, 8.0, 16.0];
//! assert_eq!(sum(&numbers), 31.0);
//! assert_eq!(average(&numbers).unwrap(), 6.2);
//! assert_eq!(median(&numbers).unwrap(), 4.0);
//! assert_eq!(PI, 3.14);
//! ```

pub mod stats;

pub use stats::{average, median, sum, StatsError, PI};
