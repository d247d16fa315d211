//! Vandermonde system construction and Gaussian elimination.
//!
//! Fitting a degree `n-1` polynomial through `n` sample points is solving
//! the linear system `A * c = b` where row `i` of `A` holds the descending
//! powers of `x_i` and `b_i = y_i`. The solve runs over `f64` with partial
//! pivoting; callers round the result back to integers. For the problem
//! sizes this crate targets (a few dozen points at most) that is accurate
//! enough for rounding to recover the true integer coefficients.

use crate::error::ReconstructError;
use crate::points::Point;

/// Solve for the coefficients of the unique polynomial of degree `n - 1`
/// passing through ``points``, highest degree first.
/// #Parameters:
/// - `points` exactly `n` sample points with pairwise distinct x coordinates
///
/// #Output
/// Returns the `n` polynomial coefficients, index 0 holding the coefficient
/// of `x^(n-1)` and the last index the constant term. Fails with
/// `SingularSystem` when the points share an x coordinate or the slice is
/// empty.
pub fn solve(points: &[Point]) -> Result<Vec<f64>, ReconstructError> {
    let n = points.len();
    if n == 0 {
        return Err(ReconstructError::SingularSystem);
    }

    // A[i][j] = x_i ^ (n-1-j), so column 0 carries the highest power and the
    // solution vector comes out highest degree first.
    let mut matrix: Vec<Vec<f64>> = points
        .iter()
        .map(|point| {
            (0..n)
                .rev()
                .map(|power| (point.x as f64).powi(power as i32))
                .collect()
        })
        .collect();
    let mut rhs: Vec<f64> = points.iter().map(|point| point.y).collect();

    gaussian_elimination(&mut matrix, &mut rhs)
}

/// Gaussian elimination with partial pivoting over a square system.
fn gaussian_elimination(
    matrix: &mut [Vec<f64>],
    rhs: &mut [f64],
) -> Result<Vec<f64>, ReconstructError> {
    let n = matrix.len();

    for i in 0..n {
        // Bring the largest-magnitude entry of column i into the pivot
        // position. Without this, small pivots amplify rounding error.
        let mut max_row = i;
        for row in i + 1..n {
            if matrix[row][i].abs() > matrix[max_row][i].abs() {
                max_row = row;
            }
        }
        matrix.swap(i, max_row);
        rhs.swap(i, max_row);

        if matrix[i][i] == 0.0 {
            return Err(ReconstructError::SingularSystem);
        }

        for row in i + 1..n {
            let factor = -matrix[row][i] / matrix[i][i];
            // The eliminated entry is exactly zero, not residual noise.
            matrix[row][i] = 0.0;
            for col in i + 1..n {
                let delta = factor * matrix[i][col];
                matrix[row][col] += delta;
            }
            let delta = factor * rhs[i];
            rhs[row] += delta;
        }
    }

    // Rolling back-substitution: as each coefficient resolves, its
    // contribution is subtracted from every right-hand side above it.
    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        solution[i] = rhs[i] / matrix[i][i];
        for row in 0..i {
            let delta = matrix[row][i] * solution[i];
            rhs[row] -= delta;
        }
    }
    Ok(solution)
}
