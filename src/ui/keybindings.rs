use crate::domain::Screen;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints shown in the top bar for `screen`
fn hints_for(screen: Screen) -> Vec<&'static str> {
    match screen {
        Screen::Menu => vec!["↑/↓ select", "1-4 open", "Enter open", "q quit"],
        Screen::Stress => vec!["Space start/stop", "m music", "Esc menu", "q quit"],
        Screen::Sleep => vec!["Space start/stop", "Esc menu", "q quit"],
        Screen::Focus => vec![
            "Space breathe",
            "p pomodoro",
            "r reset",
            "1/2/3 25·15·5 min",
            "m playlist",
            "Esc menu",
            "q quit",
        ],
        Screen::Allergies => vec!["d reminder", "Esc menu", "q quit"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, screen: Screen, area: Rect) {
    let spans: Vec<Span> = hints_for(screen)
        .into_iter()
        .map(|hint| Span::raw(format!(" {}  ", hint)))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).style(hint_style());
    f.render_widget(paragraph, area);
}
