pub mod binning;
pub mod density;
pub mod export;
pub mod render;
pub mod report;
pub mod sample;

pub use binning::{BinSet, MAX_BINS};
pub use density::DensityProfile;
pub use export::{print_summary, summary_json, write_summary};
pub use normplot_common::{Config, NormplotError, RenderConfig, Result};
pub use render::{encode_pdf, write_pdf, Bar, PageGeometry};
pub use report::{
    ensure_output_dir, generate_report, BuildHookRequest, FormRequest, ReportRequest,
    ReportSummary,
};
pub use sample::{load_sample, parse_sample, Sample, ToSample};
