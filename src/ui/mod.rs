pub mod allergies_pane;
pub mod animation_pane;
pub mod breathing_pane;
pub mod header;
pub mod keybindings;
pub mod layout;
pub mod menu_pane;
pub mod notes_pane;
pub mod pomodoro_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::Screen;
use allergies_pane::render_allergies_pane;
use animation_pane::render_animation_pane;
use breathing_pane::render_breathing_pane;
use header::render_header;
use keybindings::render_keybindings;
use layout::{create_layout, split_module};
use menu_pane::render_menu_pane;
use notes_pane::{render_how_it_works, render_music_toggle};
use pomodoro_pane::render_focus_side;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use styles::done_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size());

    render_keybindings(f, app.screen, layout.keybindings_area);
    render_header(f, app, layout.header_area);

    if app.screen == Screen::Menu {
        render_menu_pane(f, app, layout.content_area);
    } else {
        let (main, side) = split_module(layout.content_area);

        match app.active_breathing() {
            Some(breathing) => render_breathing_pane(f, breathing, main),
            None => render_allergies_pane(f, &app.allergies, main),
        }

        match app.screen {
            Screen::Stress => {
                let [music, notes, animation] = split_side(side, 4);
                render_music_toggle(f, app.stress.music_playing, music);
                render_how_it_works(f, &app.stress.breathing, notes);
                render_animation_pane(f, app, animation);
            }
            Screen::Sleep => {
                let [_, notes, animation] = split_side(side, 0);
                render_how_it_works(f, &app.sleep.breathing, notes);
                render_animation_pane(f, app, animation);
            }
            Screen::Focus => {
                let [_, timers, animation] = split_side(side, 0);
                render_focus_side(f, &app.focus, timers);
                render_animation_pane(f, app, animation);
            }
            Screen::Menu | Screen::Allergies => render_animation_pane(f, app, side),
        }
    }

    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Span::styled(format!(" {}", message), done_style()));
        f.render_widget(status, layout.status_area);
    }
}

/// Side panel rows: a fixed-height top box, notes, then the animation
fn split_side(area: Rect, top: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Min(0),
            Constraint::Length(11),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}
