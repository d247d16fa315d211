//! Reconstruction of a polynomial's constant term from a threshold number of
//! base-encoded sample points, the arithmetic behind Shamir-style secret
//! recovery.
//!
//! An input record carries a threshold `k` and a set of shares, each share a
//! digit string in its own base. The crate decodes every share exactly,
//! keeps the first `k` points in document order, fits the unique polynomial
//! of degree `k - 1` through them with a partial-pivot Gaussian solve, and
//! rounds the coefficients back to integers. The constant term is the
//! secret.
//!
//! The pipeline is pure and holds no state between calls, so independent
//! records can be processed in any order or in parallel by the caller.

pub mod error;
pub mod points;
pub mod radix;
pub mod reconstruct;
pub mod record;
pub mod solver;

#[cfg(test)]
mod proptests;

pub use crate::error::ReconstructError;
pub use crate::points::Point;
pub use crate::reconstruct::{reconstruct, Reconstruction};
pub use crate::record::{Keys, Record, ShareEntry};
