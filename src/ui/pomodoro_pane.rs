use crate::domain::screens::PLAYLISTS;
use crate::domain::{FocusScreen, PRESETS};
use crate::ui::styles::{
    border_style, default_style, done_style, gauge_style, hint_style, idle_style, paused_style,
    running_style, selected_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Render the Focus side panel: Pomodoro clock above the playlists
pub fn render_focus_side(f: &mut Frame, focus: &FocusScreen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    render_pomodoro_pane(f, focus, chunks[0]);
    render_playlists(f, focus, chunks[1]);
}

/// Render the Pomodoro timer with its preset row and progress gauge
pub fn render_pomodoro_pane(f: &mut Frame, focus: &FocusScreen, area: Rect) {
    let pomodoro = &focus.pomodoro;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" ⏱ Pomodoro ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Clock face
            Constraint::Length(1), // Status
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Presets
            Constraint::Min(0),
        ])
        .split(inner);

    let face_style = if pomodoro.is_running() { running_style() } else { default_style() };
    let face = Paragraph::new(Line::from(Span::styled(pomodoro.clock_face(), face_style)))
        .alignment(Alignment::Center);
    f.render_widget(face, chunks[0]);

    let status = if pomodoro.is_finished() {
        Span::styled("✓ session complete · r to reset", done_style())
    } else if pomodoro.is_running() {
        Span::styled("▶ focusing", running_style())
    } else if pomodoro.remaining_secs() < pomodoro.total_secs() {
        Span::styled("⏸ paused", paused_style())
    } else {
        Span::styled("p to start", idle_style())
    };
    f.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Center), chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(pomodoro.progress().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, chunks[2]);

    let mut presets = vec![Span::styled("Presets: ", hint_style())];
    for (i, minutes) in PRESETS.iter().enumerate() {
        let style = if *minutes == pomodoro.minutes() { selected_style() } else { default_style() };
        presets.push(Span::styled(format!(" {} ", minutes), style));
        presets.push(Span::styled(format!("[{}] ", i + 1), hint_style()));
    }
    f.render_widget(Paragraph::new(Line::from(presets)).alignment(Alignment::Center), chunks[3]);
}

fn render_playlists(f: &mut Frame, focus: &FocusScreen, area: Rect) {
    let items: Vec<ListItem> = PLAYLISTS
        .iter()
        .enumerate()
        .map(|(i, (name, genre))| {
            let playing = focus.playing == Some(i);
            let marker = if playing { "▶ " } else { "  " };
            let style = if playing { running_style() } else { default_style() };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", marker, name), style),
                Span::styled(format!("  {}", genre), hint_style()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" 🎧 Focus Music ", title_style())),
    );
    f.render_widget(list, area);
}
