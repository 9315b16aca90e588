use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::domain::Screen;

// The loop ticks at ~20 FPS; decorations step every few frames
const FRAMES_PER_STEP: u32 = 10;

pub fn render_animation_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let step = (app.animation_frame / FRAMES_PER_STEP) as usize;

    let (title, animation_lines) = get_animation_for_screen(app.screen, step);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let animation = Paragraph::new(animation_lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    f.render_widget(animation, inner);
}

fn get_animation_for_screen(screen: Screen, step: usize) -> (String, Vec<Line<'static>>) {
    match screen {
        Screen::Sleep => sleep_animation(step),
        Screen::Focus => focus_animation(step),
        Screen::Menu | Screen::Stress | Screen::Allergies => drift_animation(step),
    }
}

fn drift_animation(step: usize) -> (String, Vec<Line<'static>>) {
    let title = format!("{} Drift", Screen::Stress.symbol());

    // Clouds drifting horizontally at different speeds
    let cloud_positions = [
        ("      ☁️       ", "  ☁️         ", "        ☁️   "),
        ("       ☁️      ", "   ☁️        ", "         ☁️  "),
        ("        ☁️     ", "    ☁️       ", "          ☁️ "),
        ("         ☁️    ", "     ☁️      ", "           ☁️"),
        ("          ☁️   ", "      ☁️     ", "  ☁️         "),
        ("           ☁️  ", "       ☁️    ", "   ☁️        "),
        ("  ☁️           ", "        ☁️   ", "    ☁️       "),
        ("   ☁️          ", "         ☁️  ", "     ☁️      "),
    ];

    let pos = &cloud_positions[step % cloud_positions.len()];

    let lines = vec![
        Line::from(""),
        Line::from(pos.0),
        Line::from(""),
        Line::from(pos.1),
        Line::from(""),
        Line::from(pos.2),
        Line::from(""),
        Line::from(Span::styled(" Let go ", Style::default().add_modifier(Modifier::BOLD))),
    ];

    (title, lines)
}

fn focus_animation(step: usize) -> (String, Vec<Line<'static>>) {
    let title = format!("{} Focus", Screen::Focus.symbol());

    // Coffee cup with rising steam
    let steam_frames = [
        ["  ) ) )  ", "  ) ) )  "],
        ["  ( ( (  ", "  ( ( (  "],
    ];
    let steam = &steam_frames[step % steam_frames.len()];

    let lines = vec![
        Line::from(""),
        Line::from(steam[0]),
        Line::from(steam[1]),
        Line::from("  _____  "),
        Line::from(" |     | "),
        Line::from(" |_____| "),
        Line::from("  \\___/  "),
        Line::from(""),
        Line::from(Span::styled("  Focus  ", Style::default().add_modifier(Modifier::BOLD))),
    ];

    (title, lines)
}

fn sleep_animation(step: usize) -> (String, Vec<Line<'static>>) {
    let title = format!("{} Rest", Screen::Sleep.symbol());

    // Twinkling stars around the moon
    let star_patterns = [("*", " ", "*"), (" ", "*", " ")];
    let stars = &star_patterns[step % star_patterns.len()];

    let lines = vec![
        Line::from(""),
        Line::from(format!(" {}     {} ", stars.0, stars.2)),
        Line::from(format!("    {}    ", stars.1)),
        Line::from("   .-.   "),
        Line::from("  (   )  "),
        Line::from("   '-'   "),
        Line::from("   Zzz   "),
        Line::from(""),
        Line::from(Span::styled("  Rest   ", Style::default().add_modifier(Modifier::BOLD))),
    ];

    (title, lines)
}
