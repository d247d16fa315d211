//! Extraction of solver-ready sample points from a record's shares.
//!
//! Every share is decoded and narrowed before the threshold cut, so a
//! malformed share anywhere in the record fails the whole record even when
//! it would not have been among the `k` selected points.

use num::ToPrimitive;

use crate::error::ReconstructError;
use crate::radix;
use crate::record::Record;

/// Largest integer exactly representable in an `f64`, 2^53 - 1.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A decoded sample point on the secret polynomial. `y` is exact by
/// construction: values outside the `f64`-exact integer range are rejected
/// during extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: u64,
    pub y: f64,
}

/// Decode every share of ``record`` and return the first ``k`` points.
///
/// Selection keeps document order, not ascending x order: when more than `k`
/// shares are present, the first `k` as they appear in the record are the
/// ones that participate in reconstruction.
/// #Parameters:
/// - `record` the parsed input record
/// - `k` the reconstruction threshold
///
/// #Output
/// Returns exactly `k` points, or an error if a share fails to decode, a
/// decoded value is too large for exact `f64` arithmetic, or fewer than `k`
/// shares exist.
pub fn extract_points(record: &Record, k: usize) -> Result<Vec<Point>, ReconstructError> {
    let mut points = Vec::with_capacity(record.shares.len());

    for (x, share) in &record.shares {
        let decoded = radix::decode(&share.value, share.base)?;
        let y = decoded
            .to_u64()
            .filter(|value| *value <= MAX_SAFE_INTEGER)
            .ok_or_else(|| ReconstructError::ValueOutOfRange {
                x: *x,
                value: share.value.clone(),
                base: share.base,
            })?;
        points.push(Point {
            x: *x,
            y: y as f64,
        });
    }

    if points.len() < k {
        return Err(ReconstructError::InsufficientPoints {
            required: k,
            available: points.len(),
        });
    }

    points.truncate(k);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use crate::error::ReconstructError;
    use crate::record::{Keys, Record, ShareEntry};

    use super::extract_points;

    fn record(shares: Vec<(u64, &str, u32)>) -> Record {
        let count = shares.len();
        Record {
            keys: Keys { n: count, k: count },
            shares: shares
                .into_iter()
                .map(|(x, value, base)| {
                    (
                        x,
                        ShareEntry {
                            base,
                            value: value.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_decodes_each_share() {
        let record = record(vec![(1, "166", 10), (2, "111", 2), (3, "1a", 16)]);
        let points = extract_points(&record, 3).unwrap();

        assert_eq!(points[0].x, 1);
        assert_eq!(points[0].y, 166.0);
        assert_eq!(points[1].y, 7.0);
        assert_eq!(points[2].y, 26.0);
    }

    #[test]
    fn test_truncates_in_document_order() {
        // Shares appear as x = 3, 1, 2; the first two in document order win,
        // not the two smallest x.
        let record = record(vec![(3, "30", 10), (1, "10", 10), (2, "20", 10)]);
        let points = extract_points(&record, 2).unwrap();

        let order: Vec<u64> = points.iter().map(|p| p.x).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[test]
    fn test_threshold_equal_to_available_uses_all() {
        let record = record(vec![(1, "1", 10), (2, "2", 10)]);
        assert_eq!(extract_points(&record, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_insufficient_points() {
        let record = record(vec![(1, "1", 10), (2, "2", 10)]);
        assert_eq!(
            extract_points(&record, 5),
            Err(ReconstructError::InsufficientPoints {
                required: 5,
                available: 2,
            })
        );
    }

    #[test]
    fn test_narrowing_boundary() {
        // 0x1fffffffffffff is 2^53 - 1, the largest exactly representable
        // integer; one more is out of range.
        let in_range = record(vec![(1, "1fffffffffffff", 16)]);
        let points = extract_points(&in_range, 1).unwrap();
        assert_eq!(points[0].y, 9007199254740991.0);

        let too_large = record(vec![(7, "20000000000000", 16)]);
        assert_eq!(
            extract_points(&too_large, 1),
            Err(ReconstructError::ValueOutOfRange {
                x: 7,
                value: "20000000000000".to_string(),
                base: 16,
            })
        );
    }

    #[test]
    fn test_decode_error_propagates() {
        let record = record(vec![(1, "166", 10), (2, "1g", 16)]);
        assert_eq!(
            extract_points(&record, 2),
            Err(ReconstructError::DigitOutOfRange { digit: 'g', base: 16 })
        );
    }

    #[test]
    fn test_malformed_share_beyond_threshold_still_fails() {
        // The bad share would be cut by truncation, but decoding happens
        // before the cut.
        let record = record(vec![(1, "1", 10), (2, "2", 10), (3, "1!", 10)]);
        assert_eq!(
            extract_points(&record, 2),
            Err(ReconstructError::InvalidDigit('!'))
        );
    }
}
