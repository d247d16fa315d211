//! Property-based tests for the reconstruction pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::points::Point;
    use crate::solver::solve;

    /// Evaluate a polynomial given by coefficients, highest degree first.
    fn evaluate(coefficients: &[i64], x: i64) -> i64 {
        coefficients.iter().fold(0, |acc, c| acc * x + c)
    }

    fn sample(coefficients: &[i64]) -> Vec<Point> {
        (1..=coefficients.len() as u64)
            .map(|x| Point {
                x,
                y: evaluate(coefficients, x as i64) as f64,
            })
            .collect()
    }

    fn rounded(solution: &[f64]) -> Vec<i64> {
        solution.iter().map(|c| c.round() as i64).collect()
    }

    proptest! {
        // With sample points at x = 1..=k, the float solve stays accurate
        // enough for rounding to recover the exact integer coefficients up
        // to degree 8 at full coefficient magnitude. Degree 9 systems are
        // more ill-conditioned and need the smaller magnitude below.

        #[test]
        fn recovers_polynomials_up_to_degree_eight(
            coefficients in proptest::collection::vec(-1_000_000i64..=1_000_000, 1..=9),
        ) {
            let solution = solve(&sample(&coefficients)).unwrap();
            prop_assert_eq!(rounded(&solution), coefficients);
        }

        #[test]
        fn recovers_degree_nine_polynomials(
            coefficients in proptest::collection::vec(-10_000i64..=10_000, 10),
        ) {
            let solution = solve(&sample(&coefficients)).unwrap();
            prop_assert_eq!(rounded(&solution), coefficients);
        }

        #[test]
        fn solution_length_matches_point_count(
            coefficients in proptest::collection::vec(-1_000i64..=1_000, 1..=9),
        ) {
            let solution = solve(&sample(&coefficients)).unwrap();
            prop_assert_eq!(solution.len(), coefficients.len());
        }
    }
}
