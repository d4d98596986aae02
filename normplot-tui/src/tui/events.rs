use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    if app.popup.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_popup();
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.input.clear(),
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{Popup, INVALID_INPUT_MSG};
    use normplot_core::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_backspace() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::default(), dir.path().to_path_buf());
        type_text(&mut app, "1,22");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "1,2");
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.input.is_empty());
    }

    #[test]
    fn enter_generates_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::default(), dir.path().to_path_buf());
        type_text(&mut app, "1,2,3");
        press(&mut app, KeyCode::Enter);
        let path = app.last_report.clone().expect("report path");
        assert!(path.ends_with("report.pdf"));
        assert!(path.exists());
        assert!(matches!(app.popup, Some(Popup::Info(ref m)) if m.starts_with("PDF Report generated at:")));
        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn bad_input_shows_corrective_message() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let mut app = App::new(Config::default(), out.clone());
        type_text(&mut app, "1,a,3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.popup, Some(Popup::Error(INVALID_INPUT_MSG.into())));
        assert!(app.last_report.is_none());
        assert!(!out.exists());
    }

    #[test]
    fn constant_input_reports_degenerate_fit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::default(), dir.path().to_path_buf());
        type_text(&mut app, "3,3,3");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.popup, Some(Popup::Error(ref m)) if m.starts_with("Degenerate distribution")));
    }

    #[test]
    fn keys_go_to_popup_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::default(), dir.path().to_path_buf());
        app.popup = Some(Popup::Error("x".into()));
        press(&mut app, KeyCode::Char('9'));
        assert!(app.input.is_empty());
        press(&mut app, KeyCode::Esc);
        assert!(app.popup.is_none());
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
