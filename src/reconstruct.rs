//! Orchestration of the reconstruction pipeline.
//!
//! A record flows through point extraction and the linear solve, the raw
//! `f64` coefficients are rounded to the nearest integer, and the constant
//! term of the polynomial is the reconstructed secret. Errors from the
//! collaborators propagate unchanged; this layer adds no recovery.

use crate::error::ReconstructError;
use crate::points;
use crate::record::Record;
use crate::solver;

/// The result of reconstructing one record: the polynomial's rounded integer
/// coefficients, highest degree first, and its constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub coefficients: Vec<i64>,
    pub secret: i64,
}

/// Reconstruct the polynomial behind ``record``'s shares and report its
/// constant term as the secret.
///
/// Pure function of the record: calling it twice yields identical results.
pub fn reconstruct(record: &Record) -> Result<Reconstruction, ReconstructError> {
    let points = points::extract_points(record, record.keys.k)?;
    let solution = solver::solve(&points)?;

    // `solve` rejects empty systems, so the solution is non-empty here.
    let coefficients: Vec<i64> = solution.iter().map(|c| c.round() as i64).collect();
    let secret = coefficients[coefficients.len() - 1];

    Ok(Reconstruction {
        coefficients,
        secret,
    })
}
