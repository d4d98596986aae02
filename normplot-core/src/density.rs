use crate::binning::BinSet;
use crate::sample::Sample;
use normplot_common::{NormplotError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};

/// Normal density evaluated at each bin center and rescaled to sum to 1.
///
/// This approximates the relative mass per bin; bin widths are not factored
/// in, so it is not an exact probability mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub mean: f64,
    pub std_dev: f64,
    pub values: Vec<f64>,
}

impl DensityProfile {
    pub fn fit(sample: &Sample, bins: &BinSet) -> Result<Self> {
        let mean = sample.mean();
        let std_dev = sample.std_dev();
        if std_dev == 0.0 || !std_dev.is_finite() {
            return Err(NormplotError::DegenerateDistribution(format!(
                "standard deviation of {} values around {mean} is zero, a normal fit needs non-zero spread",
                sample.len()
            )));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| NormplotError::DegenerateDistribution(e.to_string()))?;
        let raw: Vec<f64> = bins.centers.iter().map(|&c| normal.pdf(c)).collect();
        let total: f64 = raw.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(NormplotError::DegenerateDistribution(format!(
                "density N({mean}, {std_dev}) sums to {total} over the bin centers"
            )));
        }
        let values = raw.into_iter().map(|p| p / total).collect();
        Ok(Self { mean, std_dev, values })
    }
}
