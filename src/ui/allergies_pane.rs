use crate::domain::screens::SYMPTOMS;
use crate::domain::AllergiesScreen;
use crate::ui::styles::{alert_style, border_style, default_style, done_style, hint_style, idle_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the air quality readout, pollen alert, symptom list and reminder switch
pub fn render_allergies_pane(f: &mut Frame, allergies: &AllergiesScreen, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Air Quality:  ", title_style()),
            Span::styled(format!("AQI {} · {}", allergies.aqi, allergies.aqi_label), done_style()),
        ]),
        Line::from(vec![
            Span::styled("Pollen Count: ", title_style()),
            Span::styled(allergies.pollen_level, alert_style()),
        ]),
        Line::raw(""),
    ];

    if let Some(alert) = allergies.alert {
        lines.push(Line::from(Span::styled(format!("⚠ {}", alert), alert_style())));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled("Log symptoms", title_style())));
    for symptom in SYMPTOMS {
        lines.push(Line::from(Span::styled(format!("  • {}", symptom), default_style())));
    }
    lines.push(Line::raw(""));

    let (switch, style) = if allergies.daily_reminder {
        ("● On ", done_style())
    } else {
        ("○ Off", idle_style())
    };
    lines.push(Line::from(vec![
        Span::styled("Daily medication reminder: ", title_style()),
        Span::styled(switch, style),
        Span::styled("  (d to toggle)", hint_style()),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" 🍃 Today ", title_style())),
        );
    f.render_widget(paragraph, area);
}
