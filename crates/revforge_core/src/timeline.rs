//! Per-sentence edit timeline synthesis.
//!
//! Produces one record per sentence with monotonically increasing
//! timestamps: sentence 0 sits at the start instant, every successor is a
//! uniformly random `[min, max]` seconds after its predecessor. Revision
//! ids are assigned 1..=N in sentence order.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::SentenceRecord;

/// Generate the edit timeline for an ordered list of sentence texts.
///
/// The random source is injected so callers can seed it for deterministic
/// output. `created_at == modified_at` on every fresh record; only the
/// edit-timestamp operation later diverges the two.
pub fn generate<R: Rng>(
    texts: &[String],
    start: DateTime<Utc>,
    min_interval_secs: i64,
    max_interval_secs: i64,
    author: &str,
    rng: &mut R,
) -> Result<Vec<SentenceRecord>> {
    if texts.is_empty() {
        return Err(Error::EmptyInput);
    }
    if min_interval_secs < 0 || max_interval_secs < 0 || min_interval_secs > max_interval_secs {
        return Err(Error::InvalidInterval {
            min: min_interval_secs,
            max: max_interval_secs,
        });
    }

    let mut records = Vec::with_capacity(texts.len());
    let mut current = start;

    for (idx, text) in texts.iter().enumerate() {
        if idx > 0 {
            let gap = rng.gen_range(min_interval_secs..=max_interval_secs);
            // Intervals large enough to overflow the calendar are as
            // invalid as negative ones.
            current = Duration::try_seconds(gap)
                .and_then(|step| current.checked_add_signed(step))
                .ok_or(Error::InvalidInterval {
                    min: min_interval_secs,
                    max: max_interval_secs,
                })?;
        }
        records.push(SentenceRecord {
            position: idx as i64,
            text: text.clone(),
            created_at: current,
            modified_at: current,
            author: author.to_string(),
            revision_id: idx as i64 + 1,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Sentence {}.", i)).collect()
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn produces_one_record_per_sentence() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = generate(&texts(5), start(), 30, 300, "Writer", &mut rng).unwrap();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn timestamps_are_monotonic_and_gaps_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate(&texts(20), start(), 30, 300, "Writer", &mut rng).unwrap();
        for pair in records.windows(2) {
            let gap = (pair[1].created_at - pair[0].created_at).num_seconds();
            assert!((30..=300).contains(&gap), "gap {} out of bounds", gap);
        }
    }

    #[test]
    fn revision_ids_are_sequential_from_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = generate(&texts(4), start(), 0, 10, "Writer", &mut rng).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.revision_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let positions: Vec<i64> = records.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn fixed_interval_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(0);
        let records = generate(&texts(3), start(), 60, 60, "Writer", &mut rng).unwrap();
        assert_eq!(records[0].created_at, start());
        assert_eq!(records[1].created_at, start() + Duration::seconds(60));
        assert_eq!(records[2].created_at, start() + Duration::seconds(120));
    }

    #[test]
    fn fresh_records_have_equal_created_and_modified() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate(&texts(3), start(), 30, 90, "Writer", &mut rng).unwrap();
        assert!(records.iter().all(|r| r.created_at == r.modified_at));
    }

    #[test]
    fn rejects_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&[], start(), 30, 300, "Writer", &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn rejects_inverted_or_negative_intervals() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&texts(2), start(), 300, 30, "Writer", &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { min: 300, max: 30 }));

        let err = generate(&texts(2), start(), -5, 30, "Writer", &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { .. }));
    }

    #[test]
    fn astronomically_large_intervals_error_instead_of_panicking() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&texts(2), start(), i64::MAX, i64::MAX, "Writer", &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { .. }));
    }
}
