use crate::tui::session::Session;
use crate::tui::theme::Theme;
use log::{error, info, warn};
use normplot_core::{Config, FormRequest, NormplotError, ReportRequest};
use std::path::PathBuf;

pub const INVALID_INPUT_MSG: &str =
    "Invalid input. Please enter comma-separated numerical values.";

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    Info(String),
    Error(String),
}

pub struct App {
    pub input: String,
    pub output_dir: PathBuf,
    pub popup: Option<Popup>,
    pub last_report: Option<PathBuf>,
    pub status_msg: String,
    pub should_quit: bool,
    pub theme: Theme,
    pub config: Config,
}

impl App {
    pub fn new(config: Config, output_dir: PathBuf) -> Self {
        Self {
            input: String::new(),
            output_dir,
            popup: None,
            last_report: None,
            status_msg: String::from("Ready"),
            should_quit: false,
            theme: Theme::from_name(&config.display.theme),
            config,
        }
    }

    pub fn restore_from_session(&mut self, s: &Session, restore_output: bool) {
        self.input = s.input.clone();
        if restore_output {
            if let Some(dir) = s.output_dir.as_deref().filter(|d| !d.is_empty()) {
                self.output_dir = PathBuf::from(dir);
            }
        }
    }

    pub fn to_session(&self) -> Session {
        Session {
            input: self.input.clone(),
            output_dir: Some(self.output_dir.display().to_string()),
        }
    }

    /// Generates a report from the current input and opens a popup with the outcome.
    pub fn submit(&mut self) {
        let request = FormRequest::new(self.input.clone(), self.output_dir.clone());
        match request.run(&self.config) {
            Ok(summary) => {
                info!("form report written to {}", summary.path.display());
                self.status_msg = format!(
                    "{} values, {} bins, mean {:.3}, sd {:.3}",
                    summary.sample_size, summary.bins, summary.mean, summary.std_dev
                );
                self.popup = Some(Popup::Info(format!(
                    "PDF Report generated at:\n{}",
                    summary.path.display()
                )));
                self.last_report = Some(summary.path);
            }
            Err(NormplotError::Parse { token, position }) => {
                warn!("rejected form input: token #{} {token:?}", position + 1);
                self.status_msg = format!("could not parse {token:?}");
                self.popup = Some(Popup::Error(INVALID_INPUT_MSG.into()));
            }
            Err(e) => {
                error!("form report failed: {e}");
                self.status_msg = "report failed".into();
                self.popup = Some(Popup::Error(e.to_string()));
            }
        }
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }
}
