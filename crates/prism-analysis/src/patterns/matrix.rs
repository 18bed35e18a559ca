//! Co-occurrence matrix between shoot types and locations (heatmap data).

use serde::{Deserialize, Serialize};

use prism_core::types::collections::FxHashMap;
use prism_core::types::Job;

use crate::counts::Counter;

/// A dense count matrix: `cells[row][col]` jobs mention both
/// `rows[row]` and `cols[col]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CooccurrenceMatrix {
    /// Row labels (shoot types), most frequent first.
    pub rows: Vec<String>,
    /// Column labels (locations), most frequent first.
    pub cols: Vec<String>,
    pub cells: Vec<Vec<u64>>,
}

impl CooccurrenceMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }
}

/// Build the shoot type × location matrix over all jobs.
pub fn type_location_matrix(jobs: &[Job]) -> CooccurrenceMatrix {
    let mut type_counter = Counter::new();
    let mut loc_counter = Counter::new();
    for job in jobs {
        type_counter.extend(job.first().shoot_types.iter().cloned());
        loc_counter.extend(job.first().shoot_locations.iter().cloned());
    }

    let rows: Vec<String> = type_counter.ranked().into_iter().map(|e| e.value).collect();
    let cols: Vec<String> = loc_counter.ranked().into_iter().map(|e| e.value).collect();

    let row_index: FxHashMap<&str, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();
    let col_index: FxHashMap<&str, usize> = cols
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();

    let mut cells = vec![vec![0u64; cols.len()]; rows.len()];
    for job in jobs {
        let booking = job.first();
        for t in &booking.shoot_types {
            for l in &booking.shoot_locations {
                if let (Some(&r), Some(&c)) =
                    (row_index.get(t.as_str()), col_index.get(l.as_str()))
                {
                    cells[r][c] += 1;
                }
            }
        }
    }

    CooccurrenceMatrix { rows, cols, cells }
}
