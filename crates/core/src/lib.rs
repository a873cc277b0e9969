//! # feewise
//!
//! Marketplace selling-fee and profit-margin arithmetic.
//!
//! This crate is the computational core of the Feewise calculator: a fixed
//! set of numeric inputs, a pure [`calc::compute`] derivation, display
//! rounding, and the projection consumed by the fee-split chart. There is
//! no I/O and no platform dependency, so the whole contract is unit-testable
//! on the host.
//!
//! ## Quick Start
//!
//! ```
//! use feewise::prelude::*;
//!
//! let inputs = FeeInputs::default();
//! let breakdown = compute(&inputs);
//!
//! assert_eq!(breakdown.rounded().net_profit, "14.80");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization/deserialization
//!
//! ## no_std Support
//!
//! Disable default features for `no_std` environments (an allocator is
//! still required):
//! ```toml
//! feewise = { version = "0.1", default-features = false }
//! ```
//!
//! ## Modules
//!
//! - [`calc`]: Input record, derived breakdown, coercion
//! - [`chart`]: Two-slice projection for the fee-split chart
//! - [`fmt`]: Wasm-safe fixed-point formatting
//! - [`schema`]: Field metadata that drives the input form

// no_std support
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod calc;
pub mod chart;
pub mod fmt;
pub mod schema;

/// Prelude module for convenient imports.
///
/// ```
/// use feewise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calc::{coerce, compute, FeeBreakdown, FeeInputs, InputField, RoundedBreakdown};
    pub use crate::chart::{slices, ChartSlice};
    pub use crate::schema::{field_specs, FieldSpec};
}
