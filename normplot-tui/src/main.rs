mod logging;
mod tui;

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use logging::LogTarget;
use normplot_core::{
    load_sample, print_summary, summary_json, BuildHookRequest, Config, FormRequest,
    NormplotError, ReportRequest, Sample,
};
use std::path::PathBuf;
use tui::app::INVALID_INPUT_MSG;

#[derive(Parser)]
#[command(name = "normplot", version, about = "Histogram + normal fit PDF reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Site-build hook: render a sample into <OUTPUT>/pdf/report.pdf
    Build {
        output: PathBuf,
        /// JSON array or comma/newline separated numbers
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<f64>>,
        /// print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render comma-separated numbers, e.g. `normplot report "1,2,3"`
    Report {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Interactive form
    Form {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => Config::default(),
    };
    let target = match cli.command {
        Commands::Form { .. } => LogTarget::form_log(),
        _ => LogTarget::Stderr,
    };
    logging::init(&config, target);
    if let Err(e) = loaded {
        warn!("ignoring config at {}: {e}", Config::config_path().display());
    }
    match cli.command {
        Commands::Build { output, input, values, json } => run_build(output, input, values, json, &config)?,
        Commands::Report { text, output } => run_report(text, output, &config)?,
        Commands::Form { output } => {
            let explicit = output.is_some();
            let dir = output_dir(output, &config)?;
            tui::run_form(config, dir, explicit)?
        }
    }
    Ok(())
}

/// Explicit --output, else `[output].output_dir` resolved against the working directory.
fn output_dir(output: Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    let dir = output.unwrap_or_else(|| PathBuf::from(&config.output.output_dir));
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}

fn run_build(output: PathBuf, input: Option<PathBuf>, values: Option<Vec<f64>>, json: bool, config: &Config) -> anyhow::Result<()> {
    let sample = if let Some(values) = values {
        Sample::new(values)
    } else if let Some(path) = &input {
        load_sample(path)
    } else {
        Sample::new(config.hook.sample.clone())
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    let request = BuildHookRequest::new(sample, output, config);
    let summary = request.run(config).map_err(|e| {
        error!("report generation failed: {e}");
        anyhow::anyhow!("{e}")
    })?;
    if json {
        println!("{}", summary_json(&summary).map_err(|e| anyhow::anyhow!("{e}"))?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn run_report(text: String, output: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let dir = output_dir(output, config)?;
    match FormRequest::new(text, dir).run(config) {
        Ok(summary) => {
            info!("report written to {}", summary.path.display());
            println!("PDF Report generated at:\n{}", summary.path.display());
            Ok(())
        }
        Err(e @ NormplotError::Parse { .. }) => anyhow::bail!("{INVALID_INPUT_MSG} ({e})"),
        Err(e) => anyhow::bail!("{e}"),
    }
}
