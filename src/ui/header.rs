use crate::app::AppState;
use crate::ui::styles::{border_style, hint_style, title_style};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the screen heading with its tagline and the wall clock
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} {}", app.screen.symbol(), app.screen.name()),
            title_style(),
        )),
        Line::from(Span::styled(format!(" {}", app.screen.tagline()), hint_style())),
    ]);
    f.render_widget(heading, chunks[0]);

    let clock = Paragraph::new(Local::now().format("%H:%M").to_string())
        .style(hint_style())
        .alignment(Alignment::Right);
    f.render_widget(clock, chunks[1]);
}
