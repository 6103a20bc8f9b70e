//! Predefined dimensions, units and constants.
//!
//! Everything here is a `const` built from the seven base units in [`si`], so it can be used in
//! `const` contexts and costs nothing at run time.

pub mod constants;
pub mod dimensions;
pub mod other;
pub mod si;
