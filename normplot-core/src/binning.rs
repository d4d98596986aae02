use crate::sample::Sample;
use normplot_common::{NormplotError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of unit bins a single report may allocate.
pub const MAX_BINS: i64 = 100_000;

/// Unit-width integer bins covering a sample, from `floor(min)` up to one
/// past `floor(max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSet {
    pub edges: Vec<i64>,
    pub centers: Vec<f64>,
}

impl BinSet {
    pub fn from_sample(sample: &Sample) -> Result<Self> {
        let lo = floor_to_i64(sample.min())?;
        let hi = floor_to_i64(sample.max())?;
        let bins = hi - lo + 1;
        if bins > MAX_BINS {
            return Err(NormplotError::InvalidSample(format!(
                "value range {lo}..={hi} needs {bins} bins (limit {MAX_BINS})"
            )));
        }
        let edges: Vec<i64> = (lo..=hi + 1).collect();
        let centers = edges
            .windows(2)
            .map(|w| (w[0] as f64 + w[1] as f64) / 2.0)
            .collect();
        Ok(Self { edges, centers })
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

// at 2^52 and beyond f64 has no room for the half-unit bin centers
fn floor_to_i64(v: f64) -> Result<i64> {
    const LIMIT: f64 = 4_503_599_627_370_496.0;
    let f = v.floor();
    if f.abs() >= LIMIT {
        return Err(NormplotError::InvalidSample(format!("value {v} is too large to bin")));
    }
    Ok(f as i64)
}
