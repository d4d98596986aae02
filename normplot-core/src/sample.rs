use normplot_common::{NormplotError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::path::Path;

/// A non-empty sequence of finite observations. Validated once on
/// construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(NormplotError::InvalidSample("sample is empty".into()));
        }
        if let Some((idx, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(NormplotError::InvalidSample(format!(
                "value #{} is not finite ({v})",
                idx + 1
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    // always false once constructed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().mean()
    }

    /// Population standard deviation (divisor `n`).
    pub fn std_dev(&self) -> f64 {
        self.values.iter().population_std_dev()
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = NormplotError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Sample> for Vec<f64> {
    fn from(sample: Sample) -> Self {
        sample.values
    }
}

/// Conversion from an external numeric container into a [`Sample`].
pub trait ToSample {
    fn to_sample(&self) -> Result<Sample>;
}

impl<T> ToSample for [T]
where
    T: Copy + Into<f64>,
{
    fn to_sample(&self) -> Result<Sample> {
        Sample::new(self.iter().map(|&v| v.into()).collect())
    }
}

/// Parses comma-separated numbers. The first bad token rejects the whole text.
pub fn parse_sample(text: &str) -> Result<Sample> {
    let values = parse_values(text.split(','))?;
    Sample::new(values)
}

fn parse_values<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<f64>> {
    tokens
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim();
            token.parse::<f64>().map_err(|_| NormplotError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Reads a sample file: a JSON array of numbers, or comma/newline separated text.
pub fn load_sample(path: &Path) -> Result<Sample> {
    let content = std::fs::read_to_string(path)?;
    if let Ok(values) = serde_json::from_str::<Vec<f64>>(&content) {
        return Sample::new(values);
    }
    let tokens = content
        .split(|c: char| c == ',' || c == '\n')
        .filter(|t| !t.trim().is_empty());
    Sample::new(parse_values(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_invalid() {
        assert!(matches!(Sample::new(vec![]), Err(NormplotError::InvalidSample(_))));
    }

    #[test]
    fn non_finite_is_invalid() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Sample::new(vec![1.0, bad]).unwrap_err();
            assert!(matches!(err, NormplotError::InvalidSample(ref m) if m.contains("#2")));
        }
    }

    #[test]
    fn stats_use_population_std_dev() {
        let s = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.min(), 1.0);
        assert_eq!(s.max(), 3.0);
        assert!((s.mean() - 2.0).abs() < 1e-12);
        assert!((s.std_dev() - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn parse_trims_tokens() {
        let s = parse_sample(" 1, 2.5 ,-3e1").unwrap();
        assert_eq!(s.values(), &[1.0, 2.5, -30.0]);
    }

    #[test]
    fn parse_rejects_whole_text_on_bad_token() {
        match parse_sample("1,a,3") {
            Err(NormplotError::Parse { token, position }) => {
                assert_eq!(token, "a");
                assert_eq!(position, 1);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_text_is_parse_error() {
        assert!(matches!(parse_sample(""), Err(NormplotError::Parse { position: 0, .. })));
        assert!(matches!(parse_sample("1,,2"), Err(NormplotError::Parse { position: 1, .. })));
    }

    #[test]
    fn parse_nan_is_invalid_sample() {
        assert!(matches!(parse_sample("1,NaN"), Err(NormplotError::InvalidSample(_))));
    }

    #[test]
    fn containers_convert() {
        let ints: Vec<i32> = vec![1, 2, 3];
        assert_eq!(ints.to_sample().unwrap().values(), &[1.0, 2.0, 3.0]);
        let floats = [0.5f32, 1.5];
        assert_eq!(floats.to_sample().unwrap().len(), 2);
        let empty: Vec<u8> = Vec::new();
        assert!(empty.to_sample().is_err());
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Sample>("[1.0, 2.0]").is_ok());
        assert!(serde_json::from_str::<Sample>("[]").is_err());
    }

    #[test]
    fn load_json_and_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("s.json");
        std::fs::write(&json, "[1, 2, 3.5]").unwrap();
        assert_eq!(load_sample(&json).unwrap().values(), &[1.0, 2.0, 3.5]);
        let text = dir.path().join("s.txt");
        std::fs::write(&text, "4,5\n6\n").unwrap();
        assert_eq!(load_sample(&text).unwrap().values(), &[4.0, 5.0, 6.0]);
        let bad = dir.path().join("bad.txt");
        std::fs::write(&bad, "4,x\n").unwrap();
        assert!(matches!(load_sample(&bad), Err(NormplotError::Parse { .. })));
    }
}
