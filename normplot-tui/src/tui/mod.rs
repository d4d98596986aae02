pub mod app;
pub mod events;
pub mod session;
pub mod theme;
pub mod ui;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use normplot_core::Config;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};

use app::App;
use events::handle_key;
use session::Session;
use ui::render;

/// Runs the form. The last session's output directory is reused unless
/// `--output` was given.
pub fn run_form(config: Config, output_dir: PathBuf, explicit_output: bool) -> anyhow::Result<()> {
    let mut app = App::new(config, output_dir);
    if let Some(s) = Session::load() {
        app.restore_from_session(&s, !explicit_output);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // restore the terminal even when the loop fails
    let result = event_loop(&mut terminal, &mut app);

    if let Err(e) = app.to_session().save() {
        log::warn!("could not save session: {e}");
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;
    if let Some(path) = &app.last_report {
        println!("Last report: {}", path.display());
    }
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick = Duration::from_millis(100);
    loop {
        terminal.draw(|f| render(f, app))?;
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }
        if app.should_quit {
            return Ok(());
        }
    }
}
