use crate::binning::BinSet;
use crate::density::DensityProfile;
use crate::render::{encode_pdf, write_pdf, PageGeometry};
use crate::sample::{parse_sample, Sample};
use log::{debug, error, info};
use normplot_common::{Config, NormplotError, RenderConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub sample_size: usize,
    pub bins: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub bytes: u64,
}

/// Creates `dir` if needed. A failed create only aborts when the directory
/// still does not exist afterwards (another caller may have made it).
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if let Err(e) = std::fs::create_dir_all(dir) {
        error!("Couldn't create the pdf output folder in {}: {e}", dir.display());
        if !dir.is_dir() {
            return Err(NormplotError::output(dir, e));
        }
    }
    Ok(())
}

/// Bins, fits and renders `sample` into `dest_dir/file_name`.
///
/// Validation and fitting run before anything touches the file system, so an
/// invalid or degenerate sample never leaves a file behind.
pub fn generate_report(
    sample: &Sample,
    dest_dir: &Path,
    file_name: &str,
    render: &RenderConfig,
) -> Result<ReportSummary> {
    let bins = BinSet::from_sample(sample)?;
    let density = DensityProfile::fit(sample, &bins)?;
    debug!(
        "fitted N({:.4}, {:.4}) over {} bins [{}, {})",
        density.mean,
        density.std_dev,
        bins.len(),
        bins.edges[0],
        bins.edges[bins.edges.len() - 1]
    );
    let geometry = PageGeometry::layout(&bins, &density, render);
    let bytes = encode_pdf(&geometry, render);

    ensure_output_dir(dest_dir)?;
    let path = dest_dir.join(file_name);
    write_pdf(&path, &bytes)?;
    let path = path.canonicalize().map_err(|e| NormplotError::output(&path, e))?;

    Ok(ReportSummary {
        path,
        sample_size: sample.len(),
        bins: bins.len(),
        mean: density.mean,
        std_dev: density.std_dev,
        bytes: bytes.len() as u64,
    })
}

/// A caller that supplies a sample and a destination and gets back the
/// written report.
pub trait ReportRequest {
    fn sample(&self) -> Result<Sample>;

    fn destination(&self) -> PathBuf;

    fn run(&self, config: &Config) -> Result<ReportSummary> {
        let sample = self.sample()?;
        generate_report(&sample, &self.destination(), &config.output.file_name, &config.render)
    }
}

/// Site-build hook: a pre-existing sample rendered into `<output_root>/<subdir>`.
pub struct BuildHookRequest {
    pub sample: Sample,
    pub output_root: PathBuf,
    pub subdir: String,
}

impl BuildHookRequest {
    pub fn new(sample: Sample, output_root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            sample,
            output_root: output_root.into(),
            subdir: config.output.subdir.clone(),
        }
    }
}

impl ReportRequest for BuildHookRequest {
    fn sample(&self) -> Result<Sample> {
        Ok(self.sample.clone())
    }

    fn destination(&self) -> PathBuf {
        self.output_root.join(&self.subdir)
    }

    fn run(&self, config: &Config) -> Result<ReportSummary> {
        info!("Generating PDF files...");
        let summary = generate_report(
            &self.sample,
            &self.destination(),
            &config.output.file_name,
            &config.render,
        )?;
        info!("[ok] writing {}", summary.path.display());
        Ok(summary)
    }
}

/// Free text typed by a user, e.g. `"1, 2, 3"`.
pub struct FormRequest {
    pub text: String,
    pub output_dir: PathBuf,
}

impl FormRequest {
    pub fn new(text: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self { text: text.into(), output_dir: output_dir.into() }
    }
}

impl ReportRequest for FormRequest {
    fn sample(&self) -> Result<Sample> {
        parse_sample(&self.text)
    }

    fn destination(&self) -> PathBuf {
        self.output_dir.clone()
    }
}
