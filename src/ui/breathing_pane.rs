use crate::domain::screens::BreathingScreen;
use crate::domain::geometry;
use crate::domain::{Motion, Point, RenderCoordinate, Shape, Snapshot, VIEWPORT};
use crate::ui::styles::{accent_color, accent_style, border_style, hint_style, idle_style, running_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    symbols::{self, Marker},
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};
use std::time::Duration;

const GUIDE_COLOR: Color = Color::DarkGray;
const DOT_RADIUS: f64 = 6.0;

/// Viewport y grows downwards, canvas y grows upwards
fn to_canvas(p: Point) -> (f64, f64) {
    (p.x, VIEWPORT - p.y)
}

/// Render a breathing exercise: the animated shape, then label, countdown and hint
pub fn render_breathing_pane(f: &mut Frame, breathing: &BreathingScreen, area: Rect) {
    let engine = &breathing.engine;
    let snapshot = engine.snapshot();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" {} · {} ", breathing.name, engine.table().rhythm()),
            title_style(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(4)])
        .split(inner);

    let shape = engine.shape().clone();
    let motion = engine.current().motion;
    let painted = snapshot.clone();
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, VIEWPORT])
        .y_bounds([0.0, VIEWPORT])
        .paint(move |ctx| paint_shape(ctx, &shape, &motion, &painted));
    f.render_widget(canvas, chunks[0]);

    let phase_gauge = LineGauge::default()
        .gauge_style(accent_style(snapshot.accent))
        .line_set(symbols::line::THICK)
        .ratio(snapshot.progress.clamp(0.0, 1.0))
        .label(format!("{}/{}", snapshot.phase_index + 1, engine.table().len()));
    f.render_widget(phase_gauge, chunks[1]);

    let resumable = engine.resumes_from_elapsed() && engine.elapsed() > Duration::ZERO;
    f.render_widget(status_lines(&snapshot, engine.cycles(), resumable), chunks[2]);
}

fn paint_shape(ctx: &mut Context, shape: &Shape, motion: &Motion, snapshot: &Snapshot) {
    let accent = accent_color(snapshot.accent);

    match shape {
        Shape::Polygon { .. } => {
            let active_edge = match motion {
                Motion::Edge(i) => Some(*i),
                Motion::Scale { .. } => None,
            };
            for i in 0..shape.edge_count() {
                let Some((from, to)) = shape.edge(i) else { continue };
                let (x1, y1) = to_canvas(from);
                let (x2, y2) = to_canvas(to);
                let color = if snapshot.running && active_edge == Some(i) { accent } else { GUIDE_COLOR };
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
            }

            // Where the current phase ends
            if let Ok(RenderCoordinate::Point(target)) = geometry::map(shape, motion, 1.0) {
                let (x, y) = to_canvas(target);
                ctx.draw(&Circle { x, y, radius: DOT_RADIUS / 2.0, color: GUIDE_COLOR });
            }

            if let RenderCoordinate::Point(p) = snapshot.coordinate {
                let (x, y) = to_canvas(p);
                ctx.draw(&Circle { x, y, radius: DOT_RADIUS, color: accent });
                ctx.draw(&Circle { x, y, radius: DOT_RADIUS / 2.0, color: accent });
            }
        }
        Shape::Pulse { center, radius, .. } => {
            let (x, y) = to_canvas(*center);
            // Size the circle is heading for in this phase
            if let Ok(RenderCoordinate::Scale(target)) = geometry::map(shape, motion, 1.0) {
                ctx.draw(&Circle { x, y, radius: radius * target, color: GUIDE_COLOR });
            }

            if let RenderCoordinate::Scale(scale) = snapshot.coordinate {
                ctx.draw(&Circle { x, y, radius: radius * scale, color: accent });
                ctx.draw(&Circle { x, y, radius: radius * scale - 2.0, color: accent });
            }
        }
    }
}

fn status_lines(snapshot: &Snapshot, cycles: u64, resumable: bool) -> Paragraph<'static> {
    let state = if snapshot.running {
        Span::styled(format!("▶ breathing · cycle {}", cycles + 1), running_style())
    } else if resumable {
        Span::styled("⏸ Space to resume".to_string(), idle_style())
    } else {
        Span::styled("⏸ Space to begin".to_string(), idle_style())
    };

    Paragraph::new(vec![
        Line::from(Span::styled(snapshot.label.to_tag(), accent_style(snapshot.accent))),
        Line::from(Span::styled(format!("{}s", snapshot.seconds_remaining), title_style())),
        Line::from(Span::styled(snapshot.hint, hint_style())),
        Line::from(state),
    ])
    .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canvas_flips_y() {
        assert_eq!(to_canvas(Point::new(24.0, 24.0)), (24.0, 196.0));
        assert_eq!(to_canvas(Point::new(110.0, 220.0)), (110.0, 0.0));
    }
}
