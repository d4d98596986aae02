use crate::tui::app::{App, Popup};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    render_topbar(frame, app, chunks[0], theme);
    frame.render_widget(
        Paragraph::new("Enter sample data (comma-separated):").style(Style::default().fg(theme.fg)),
        chunks[1],
    );
    render_input(frame, app, chunks[2], theme);
    render_button(frame, chunks[3], theme);
    render_bottombar(frame, app, chunks[5], theme);
    if let Some(popup) = &app.popup {
        render_popup(frame, popup, area, theme);
    }
}

fn render_topbar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("[normplot]", Style::default().fg(theme.highlight)),
        Span::raw(format!(" output: {}", app.output_dir.display())),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg).fg(theme.fg)), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.popup.is_none();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Sample")
        .border_style(if focused { Style::default().fg(theme.highlight) } else { Style::default() });
    let cursor = if focused { "_" } else { "" };
    frame.render_widget(Paragraph::new(format!("{}{cursor}", app.input)).block(block), area);
}

fn render_button(frame: &mut Frame, area: Rect, theme: &Theme) {
    let button = Paragraph::new(Line::from(Span::styled(
        " Generate PDF Report (Enter) ",
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    let width = area.width.min(32);
    frame.render_widget(button, Rect { width, ..area });
}

fn render_bottombar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let bar_text = format!(" {} | Enter:generate Ctrl-U:clear Esc:quit", app.status_msg);
    frame.render_widget(Paragraph::new(bar_text).style(Style::default().bg(theme.bg).fg(theme.muted)), area);
}

fn render_popup(frame: &mut Frame, popup: &Popup, area: Rect, theme: &Theme) {
    let (title, text, color) = match popup {
        Popup::Info(msg) => ("Report Generated", msg.as_str(), theme.success),
        Popup::Error(msg) => ("Error", msg.as_str(), theme.error),
    };
    let rect = centered_rect(60, 30, area);
    frame.render_widget(Clear, rect);
    let mut lines: Vec<Line> = text.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Enter/Esc: close", Style::default().fg(theme.muted))));
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title).border_style(Style::default().fg(color)))
            .wrap(Wrap { trim: false }),
        rect,
    );
}

fn centered_rect(px: u16, py: u16, r: Rect) -> Rect {
    let v = Layout::default().direction(Direction::Vertical).constraints([Constraint::Percentage((100-py)/2), Constraint::Percentage(py), Constraint::Percentage((100-py)/2)]).split(r);
    Layout::default().direction(Direction::Horizontal).constraints([Constraint::Percentage((100-px)/2), Constraint::Percentage(px), Constraint::Percentage((100-px)/2)]).split(v[1])[1]
}
