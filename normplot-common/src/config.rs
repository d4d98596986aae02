use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page geometry and drawing constants for the report.
///
/// The scales are fixed multipliers, not derived from the data range, so very
/// large or very small samples draw outside the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_title_x")]
    pub title_x: f64,
    #[serde(default = "default_title_y")]
    pub title_y: f64,
    #[serde(default = "default_title_size")]
    pub title_size: f64,
    #[serde(default = "default_scale_x")]
    pub scale_x: f64,
    #[serde(default = "default_scale_y")]
    pub scale_y: f64,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_baseline")]
    pub baseline: f64,
    #[serde(default = "default_bar_color")]
    pub bar_color: [f32; 3],
    #[serde(default = "default_curve_color")]
    pub curve_color: [f32; 3],
    #[serde(default = "default_curve_width")]
    pub curve_width: f64,
}

// US Letter in points
fn default_page_width() -> f64 {
    612.0
}
fn default_page_height() -> f64 {
    792.0
}
fn default_title() -> String {
    "Sample Distribution Report".into()
}
fn default_title_x() -> f64 {
    72.0
}
fn default_title_y() -> f64 {
    740.0
}
fn default_title_size() -> f64 {
    14.0
}
fn default_scale_x() -> f64 {
    5.0
}
fn default_scale_y() -> f64 {
    200.0
}
fn default_bar_width() -> f64 {
    5.0
}
fn default_baseline() -> f64 {
    100.0
}
fn default_bar_color() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}
fn default_curve_color() -> [f32; 3] {
    [1.0, 0.0, 0.0]
}
fn default_curve_width() -> f64 {
    2.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
            title: default_title(),
            title_x: default_title_x(),
            title_y: default_title_y(),
            title_size: default_title_size(),
            scale_x: default_scale_x(),
            scale_y: default_scale_y(),
            bar_width: default_bar_width(),
            baseline: default_baseline(),
            bar_color: default_bar_color(),
            curve_color: default_curve_color(),
            curve_width: default_curve_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_subdir")]
    pub subdir: String, // build hook writes into <output>/<subdir>
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_output_dir() -> String {
    ".".into()
}
fn default_subdir() -> String {
    "pdf".into()
}
fn default_file_name() -> String {
    "report.pdf".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            subdir: default_subdir(),
            file_name: default_file_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookConfig {
    #[serde(default = "default_hook_sample")]
    pub sample: Vec<f64>,
}

fn default_hook_sample() -> Vec<f64> {
    vec![1.0, 2.0, 3.0]
}

impl Default for HookConfig {
    fn default() -> Self {
        Self { sample: default_hook_sample() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { theme: default_theme() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String, // RUST_LOG wins when set
}

fn default_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub hook: HookConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        if let Ok(env_path) = std::env::var("NORMPLOT_CONFIG") {
            return PathBuf::from(env_path); // $NORMPLOT_CONFIG overrides default config path
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("normplot")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::NormplotError::Config(e.to_string()))
    }

    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::NormplotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
