use crate::domain::BreathingScreen;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, idle_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Short explanation of the exercise and its rhythm
pub fn render_how_it_works(f: &mut Frame, breathing: &BreathingScreen, area: Rect) {
    let table = breathing.engine.table();
    let mut lines = vec![
        Line::from(Span::styled(breathing.summary, default_style())),
        Line::raw(""),
    ];
    for phase in table.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<7}", phase.label.name()), title_style()),
            Span::styled(format!("{:>2}s  ", phase.duration_secs), default_style()),
            Span::styled(phase.hint, hint_style()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("One cycle: {}s", table.cycle_duration().as_secs()),
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" How it works ", title_style())),
    );
    f.render_widget(paragraph, area);
}

/// Calm music switch (decorative)
pub fn render_music_toggle(f: &mut Frame, playing: bool, area: Rect) {
    let (state, style) = if playing {
        ("♪ Playing", done_style())
    } else {
        ("Off", idle_style())
    };

    let paragraph = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("🎵 Calm Music  ", title_style()),
            Span::styled(state, style),
        ]),
        Line::from(Span::styled("Nature sounds & ambient · m to toggle", hint_style())),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    f.render_widget(paragraph, area);
}
