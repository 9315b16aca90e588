//! Breathing patterns used by the screens.
//!
//! Each pattern is a phase table plus the shape it is drawn on; the screens
//! build their engines from these instead of carrying their own timers.

use super::enums::PhaseLabel;
use super::error::ConfigError;
use super::geometry::{Motion, Shape, VIEWPORT};
use super::phase::{Accent, Phase, PhaseTable};

/// Padding between the viewport border and the box breathing square
pub const SQUARE_PAD: f64 = 24.0;
/// Circumradius of the triangle breathing triangle
pub const TRIANGLE_RADIUS: f64 = 90.0;
/// Base radius of the 4-7-8 pulse circle
pub const PULSE_RADIUS: f64 = 70.0;

/// A named phase table and the shape it animates on
#[derive(Debug, Clone)]
pub struct BreathingPattern {
    pub name: &'static str,
    pub summary: &'static str,
    pub table: PhaseTable,
    pub shape: Shape,
}

/// Triangle breathing 5-5-5, used for stress reduction
pub fn triangle_breathing() -> Result<BreathingPattern, ConfigError> {
    let table = PhaseTable::new(vec![
        Phase::new(PhaseLabel::Inhale, 5, Motion::Edge(0), Accent::hex(0x5fe3a1), "Inhale through your nose"),
        Phase::new(PhaseLabel::Hold, 5, Motion::Edge(1), Accent::hex(0x7cc5ff), "Hold – relax shoulders"),
        Phase::new(PhaseLabel::Exhale, 5, Motion::Edge(2), Accent::hex(0x1d7b55), "Exhale gently through mouth"),
    ])?;

    Ok(BreathingPattern {
        name: "Triangle Breathing",
        summary: "Steady 5–5–5 rhythm that balances the nervous system without drowsiness",
        table,
        shape: Shape::triangle(VIEWPORT, TRIANGLE_RADIUS),
    })
}

/// Box breathing 4-4-4-4, used on the focus screen
pub fn box_breathing() -> Result<BreathingPattern, ConfigError> {
    let table = PhaseTable::new(vec![
        Phase::new(PhaseLabel::Inhale, 4, Motion::Edge(0), Accent::hex(0x3b82f6), "Inhale through your nose"),
        Phase::new(PhaseLabel::Hold, 4, Motion::Edge(1), Accent::hex(0x60a5fa), "Hold – keep shoulders relaxed"),
        Phase::new(PhaseLabel::Exhale, 4, Motion::Edge(2), Accent::hex(0x2563eb), "Exhale gently through mouth"),
        Phase::new(PhaseLabel::Hold, 4, Motion::Edge(3), Accent::hex(0x93c5fd), "Hold – stay calm"),
    ])?;

    Ok(BreathingPattern {
        name: "Box Breathing",
        summary: "Equal breath for mental clarity",
        table,
        shape: Shape::square(VIEWPORT, SQUARE_PAD),
    })
}

/// 4-7-8 breathing on a pulsing circle, used to wind down for sleep
pub fn four_seven_eight() -> Result<BreathingPattern, ConfigError> {
    let table = PhaseTable::new(vec![
        Phase::new(
            PhaseLabel::Inhale,
            4,
            Motion::Scale { from: 0.8, to: 1.2 },
            Accent::hex(0x7aa2ff),
            "Inhale through your nose – slow and quiet",
        ),
        Phase::new(
            PhaseLabel::Hold,
            7,
            Motion::Scale { from: 1.2, to: 1.2 },
            Accent::hex(0x9aa6ff),
            "Hold your breath – relax your body",
        ),
        Phase::new(
            PhaseLabel::Exhale,
            8,
            Motion::Scale { from: 1.2, to: 0.8 },
            Accent::hex(0x3b3f5c),
            "Exhale through your mouth – gentle whoosh sound",
        ),
    ])?;

    Ok(BreathingPattern {
        name: "4-7-8 Breathing",
        summary: "Long exhale that slows the heart rate and prepares the body for sleep",
        table,
        shape: Shape::pulse(VIEWPORT, PULSE_RADIUS),
    })
}

/// Every built-in pattern, in menu order
pub fn all() -> Result<Vec<BreathingPattern>, ConfigError> {
    Ok(vec![triangle_breathing()?, four_seven_eight()?, box_breathing()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::PhaseTimerEngine;

    #[test]
    fn test_builtin_patterns_build_engines() {
        for pattern in all().unwrap() {
            let engine = PhaseTimerEngine::new(pattern.table.clone(), pattern.shape.clone(), false);
            assert!(engine.is_ok(), "{} failed to build", pattern.name);
        }
    }

    #[test]
    fn test_pattern_rhythms() {
        assert_eq!(triangle_breathing().unwrap().table.rhythm(), "5-5-5");
        assert_eq!(box_breathing().unwrap().table.rhythm(), "4-4-4-4");
        assert_eq!(four_seven_eight().unwrap().table.rhythm(), "4-7-8");
    }

    #[test]
    fn test_box_edges_follow_phases() {
        let pattern = box_breathing().unwrap();
        for (i, phase) in pattern.table.iter().enumerate() {
            assert_eq!(phase.motion, Motion::Edge(i));
        }
    }
}
