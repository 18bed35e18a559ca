//! Job-level grouping of booking rows.

use prism_core::types::collections::FxHashMap;
use prism_core::types::{BookingRecord, Job};

/// Group bookings by `job_id`, preserving first-seen job order.
///
/// The first booking of a job supplies its job-level fields; all bookings
/// are retained on the job for talent-level analysis.
pub fn group_jobs(bookings: &[BookingRecord]) -> Vec<Job> {
    let mut index: FxHashMap<i64, usize> = FxHashMap::default();
    let mut jobs: Vec<Job> = Vec::new();

    for booking in bookings {
        match index.get(&booking.job_id) {
            Some(&i) => jobs[i].bookings.push(booking.clone()),
            None => {
                index.insert(booking.job_id, jobs.len());
                jobs.push(Job {
                    job_id: booking.job_id,
                    bookings: vec![booking.clone()],
                });
            }
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(job_id: i64, talent: &str) -> BookingRecord {
        BookingRecord {
            job_id,
            talent_name: talent.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_job_id_first_seen_order() {
        let bookings = vec![
            booking(2, "a"),
            booking(1, "b"),
            booking(2, "c"),
            booking(3, "d"),
        ];
        let jobs = group_jobs(&bookings);

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].job_id, 2);
        assert_eq!(jobs[0].booking_count(), 2);
        assert_eq!(jobs[0].first().talent_name, "a");
        assert_eq!(jobs[1].job_id, 1);
        assert_eq!(jobs[2].job_id, 3);
    }

    #[test]
    fn empty_input_yields_no_jobs() {
        assert!(group_jobs(&[]).is_empty());
    }
}
