use crate::app::AppState;
use crate::domain::Screen;
use crate::ui::layout::create_centered_area;
use crate::ui::styles::{border_style, default_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the module picker
pub fn render_menu_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let modules = Screen::modules();
    let menu_area = create_centered_area(area, 60, (modules.len() as u16) * 3 + 2);

    let items: Vec<ListItem> = modules
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), hint_style()),
                    Span::raw(format!("{} {}", screen.symbol(), screen.name())),
                ]),
                Line::from(Span::styled(format!("      {}", screen.tagline()), hint_style())),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" 🌿 Calma ", title_style())),
        )
        .style(default_style())
        .highlight_style(selected_style());

    let mut state = ListState::default();
    state.select(Some(app.menu_index));
    f.render_stateful_widget(list, menu_area, &mut state);
}
