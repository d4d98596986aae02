use normplot_core::Config;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Log file for the interactive form, which owns the terminal.
    pub fn form_log() -> Self {
        Self::File(
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("normplot")
                .join("normplot.log"),
        )
    }
}

/// Installs the process-wide subscriber. `log` records are forwarded to it.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &Config, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = path
                .parent()
                .map(std::fs::create_dir_all)
                .transpose()
                .and_then(|_| {
                    std::fs::OpenOptions::new().create(true).append(true).open(&path)
                });
            match file {
                Ok(file) => builder.with_writer(Mutex::new(file)).with_ansi(false).try_init(),
                // no log file, run silently rather than draw over the form
                Err(_) => return,
            }
        }
    };
    if let Err(e) = result {
        eprintln!("logging already initialised: {e}");
    }
}
