use super::enums::PhaseLabel;
use super::error::ConfigError;
use super::geometry::{RenderCoordinate, Shape, Track};
use super::phase::{Accent, Phase, PhaseTable};
use std::time::Duration;
use tracing::debug;

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub label: PhaseLabel,
    pub hint: &'static str,
    pub accent: Accent,
    pub phase_index: usize,
    pub seconds_remaining: u32,
    pub progress: f64,
    pub coordinate: RenderCoordinate,
    pub running: bool,
}

/// Drives a repeating sequence of timed phases from a single monotonic clock.
///
/// Three things are derived from each `tick(now)`: the continuous progress
/// along the current phase, the whole-second countdown (stepped on its own
/// one-second cadence, never recomputed from progress) and the phase advance
/// once the phase duration has elapsed. Nothing is scheduled, so stopping is
/// all the teardown there is.
#[derive(Debug, Clone)]
pub struct PhaseTimerEngine {
    table: PhaseTable,
    shape: Shape,
    tracks: Vec<Track>,
    resume_from_elapsed: bool,

    running: bool,
    index: usize,
    /// Elapsed time in the current phase as of `observed_at`
    elapsed: Duration,
    seconds_remaining: u32,
    /// Completed full cycles since the last fresh start
    cycles: u64,

    /// Clock reading at which the current running stretch began
    resumed_at: Duration,
    /// Elapsed time already accumulated when the stretch began
    elapsed_base: Duration,
    /// Clock reading of the last start or tick
    observed_at: Duration,
    next_countdown_at: Duration,
    /// Time left until the next countdown step, kept across a pause
    countdown_carry: Duration,
}

impl PhaseTimerEngine {
    /// Build an engine, resolving every phase motion against `shape`.
    ///
    /// With `resume_from_elapsed` off, every `start` begins again at phase 0;
    /// with it on, `start` continues the paused phase where it stopped.
    pub fn new(table: PhaseTable, shape: Shape, resume_from_elapsed: bool) -> Result<Self, ConfigError> {
        let tracks = table
            .iter()
            .enumerate()
            .map(|(index, phase)| shape.track(index, &phase.motion))
            .collect::<Result<Vec<_>, _>>()?;

        let first_duration = table.get(0).duration_secs;

        Ok(Self {
            table,
            shape,
            tracks,
            resume_from_elapsed,
            running: false,
            index: 0,
            elapsed: Duration::ZERO,
            seconds_remaining: first_duration,
            cycles: 0,
            resumed_at: Duration::ZERO,
            elapsed_base: Duration::ZERO,
            observed_at: Duration::ZERO,
            next_countdown_at: COUNTDOWN_STEP,
            countdown_carry: COUNTDOWN_STEP,
        })
    }

    /// Start (or resume) cycling. No-op while already running.
    pub fn start(&mut self, now: Duration) {
        if self.running {
            return;
        }
        if !self.resume_from_elapsed {
            self.rewind();
        }

        self.running = true;
        self.resumed_at = now;
        self.observed_at = now;
        self.elapsed_base = self.elapsed;
        self.next_countdown_at = now + self.countdown_carry;

        debug!(
            phase = self.current().label.name(),
            index = self.index,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "breathing started"
        );
    }

    /// Stop advancing, freezing elapsed time at the last observed value.
    /// Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.countdown_carry = self.next_countdown_at.saturating_sub(self.observed_at);
        debug!(index = self.index, "breathing stopped");
    }

    /// Alias for [`stop`](Self::stop)
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Start if stopped, pause if running
    pub fn toggle(&mut self, now: Duration) {
        if self.running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Stop and return to the initial state. Safe to call in any state.
    pub fn reset(&mut self) {
        self.running = false;
        self.rewind();
    }

    /// Sample the clock. Returns how many phase advances happened.
    ///
    /// Does nothing unless running, so a stopped engine never changes however
    /// far the clock moves.
    pub fn tick(&mut self, now: Duration) -> usize {
        if !self.running {
            return 0;
        }
        // A clock reading from before the stretch began is treated as "no time passed"
        let now = now.max(self.resumed_at);
        let mut advances = 0;

        loop {
            let duration = self.current().duration();
            let elapsed = self.elapsed_base + (now - self.resumed_at);

            if elapsed < duration {
                self.elapsed = elapsed;
                break;
            }

            // The phase ended at this instant; the next one starts there
            let boundary = self.resumed_at + (duration - self.elapsed_base);
            self.index = self.table.next_index(self.index);
            if self.index == 0 {
                self.cycles += 1;
            }
            self.elapsed_base = Duration::ZERO;
            self.elapsed = Duration::ZERO;
            self.resumed_at = boundary;
            self.seconds_remaining = self.current().duration_secs;
            self.next_countdown_at = boundary + COUNTDOWN_STEP;
            advances += 1;

            debug!(
                phase = self.current().label.name(),
                index = self.index,
                cycles = self.cycles,
                "phase advanced"
            );
        }

        while self.next_countdown_at <= now {
            self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
            self.next_countdown_at += COUNTDOWN_STEP;
        }

        self.observed_at = now;
        advances
    }

    /// Current view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let phase = self.current();
        let progress = self.progress();
        Snapshot {
            label: phase.label,
            hint: phase.hint,
            accent: phase.accent,
            phase_index: self.index,
            seconds_remaining: self.seconds_remaining,
            progress,
            coordinate: self.tracks[self.index].at(progress),
            running: self.running,
        }
    }

    /// Position within the current phase, in [0, 1]
    pub fn progress(&self) -> f64 {
        let duration = self.current().duration().as_secs_f64();
        (self.elapsed.as_secs_f64() / duration).clamp(0.0, 1.0)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase_index(&self) -> usize {
        self.index
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn resumes_from_elapsed(&self) -> bool {
        self.resume_from_elapsed
    }

    pub fn current(&self) -> &Phase {
        self.table.get(self.index)
    }

    pub fn table(&self) -> &PhaseTable {
        &self.table
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Back to phase 0 with nothing elapsed
    fn rewind(&mut self) {
        self.index = 0;
        self.elapsed = Duration::ZERO;
        self.elapsed_base = Duration::ZERO;
        self.seconds_remaining = self.table.get(0).duration_secs;
        self.countdown_carry = COUNTDOWN_STEP;
        self.cycles = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{Motion, Point, VIEWPORT};
    use pretty_assertions::assert_eq;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn ms(m: u64) -> Duration {
        Duration::from_millis(m)
    }

    fn phase(label: PhaseLabel, secs: u32, edge: usize) -> Phase {
        Phase::new(label, secs, Motion::Edge(edge), Accent::hex(0x7cc5ff), "breathe")
    }

    fn triangle_engine(resume: bool) -> PhaseTimerEngine {
        let table = PhaseTable::new(vec![
            phase(PhaseLabel::Inhale, 5, 0),
            phase(PhaseLabel::Hold, 5, 1),
            phase(PhaseLabel::Exhale, 5, 2),
        ])
        .unwrap();
        PhaseTimerEngine::new(table, Shape::triangle(VIEWPORT, 90.0), resume).unwrap()
    }

    fn box_engine() -> PhaseTimerEngine {
        let table = PhaseTable::new(vec![
            phase(PhaseLabel::Inhale, 4, 0),
            phase(PhaseLabel::Hold, 4, 1),
            phase(PhaseLabel::Exhale, 4, 2),
            phase(PhaseLabel::Hold, 4, 3),
        ])
        .unwrap();
        PhaseTimerEngine::new(table, Shape::square(VIEWPORT, 24.0), false).unwrap()
    }

    /// Drive the engine in `step` increments from `from` to `to` inclusive
    fn drive(engine: &mut PhaseTimerEngine, from: Duration, to: Duration, step: Duration) -> Vec<usize> {
        let mut visited = Vec::new();
        let mut now = from;
        while now <= to {
            if engine.tick(now) > 0 {
                visited.push(engine.phase_index());
            }
            now += step;
        }
        visited
    }

    #[test]
    fn test_initial_state() {
        let engine = triangle_engine(false);
        assert!(!engine.is_running());
        assert_eq!(engine.phase_index(), 0);
        assert_eq!(engine.elapsed(), Duration::ZERO);
        assert_eq!(engine.seconds_remaining(), 5);
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn test_start_enters_phase_zero_at_full_duration() {
        let mut engine = triangle_engine(false);
        engine.start(secs(100));

        let snap = engine.snapshot();
        assert!(snap.running);
        assert_eq!(snap.phase_index, 0);
        assert_eq!(snap.label, PhaseLabel::Inhale);
        assert_eq!(snap.seconds_remaining, 5);
        assert_eq!(snap.progress, 0.0);
        assert_eq!(snap.coordinate, RenderCoordinate::Point(Point::new(110.0, 20.0)));
    }

    #[test]
    fn test_triangle_breathing_scenario() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);

        drive(&mut engine, ms(100), secs(5), ms(100));
        assert_eq!(engine.phase_index(), 1);
        assert_eq!(engine.seconds_remaining(), 5);
        assert_eq!(engine.current().label, PhaseLabel::Hold);

        drive(&mut engine, ms(5100), secs(15), ms(100));
        assert_eq!(engine.phase_index(), 0);
        assert_eq!(engine.cycles(), 1);
    }

    #[test]
    fn test_single_large_jump_advances_through_phases() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);

        assert_eq!(engine.tick(secs(5)), 1);
        assert_eq!(engine.phase_index(), 1);
        assert_eq!(engine.seconds_remaining(), 5);

        // Two more advances wrap back round, 2.5s into Inhale
        assert_eq!(engine.tick(ms(17_500)), 2);
        assert_eq!(engine.phase_index(), 0);
        assert_eq!(engine.cycles(), 1);
        assert_eq!(engine.elapsed(), ms(2500));
        assert_eq!(engine.seconds_remaining(), 3);
    }

    #[test]
    fn test_cycling_visits_every_phase_in_order() {
        let mut engine = box_engine();
        engine.start(Duration::ZERO);

        let visited = drive(&mut engine, ms(50), secs(32), ms(50));
        assert_eq!(visited, vec![1, 2, 3, 0, 1, 2, 3, 0]);
        assert_eq!(engine.cycles(), 2);
    }

    #[test]
    fn test_seconds_remaining_stays_bounded() {
        let mut engine = box_engine();
        engine.start(ms(3));

        let mut now = ms(3);
        while now < secs(40) {
            engine.tick(now);
            let duration = engine.current().duration_secs;
            let remaining = engine.seconds_remaining();
            assert!(remaining <= duration, "remaining {} > duration {}", remaining, duration);
            assert!(remaining >= 1, "countdown hit zero before the phase advanced");
            now += ms(37);
        }
    }

    #[test]
    fn test_countdown_steps_once_per_second() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);

        engine.tick(ms(999));
        assert_eq!(engine.seconds_remaining(), 5);
        engine.tick(secs(1));
        assert_eq!(engine.seconds_remaining(), 4);
        engine.tick(ms(3500));
        assert_eq!(engine.seconds_remaining(), 2);
        engine.tick(ms(4999));
        assert_eq!(engine.seconds_remaining(), 1);
    }

    #[test]
    fn test_progress_monotonic_within_phase() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);

        let mut last_progress = 0.0;
        let mut last_index = 0;
        let mut now = Duration::ZERO;
        while now <= secs(20) {
            engine.tick(now);
            let progress = engine.progress();
            assert!(progress < 1.0);
            if engine.phase_index() == last_index {
                assert!(progress >= last_progress);
            } else {
                assert_eq!(progress, 0.0);
            }
            last_progress = progress;
            last_index = engine.phase_index();
            now += ms(250);
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut engine = triangle_engine(true);
        engine.start(Duration::ZERO);
        engine.tick(ms(6200));

        engine.stop();
        let once = engine.snapshot();
        engine.stop();
        assert_eq!(engine.snapshot(), once);
        assert!(!once.running);
    }

    #[test]
    fn test_no_mutation_after_stop() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);
        engine.tick(ms(2300));
        engine.stop();

        let frozen = engine.snapshot();
        for t in [3u64, 5, 10, 60, 3600] {
            assert_eq!(engine.tick(secs(t)), 0);
        }
        assert_eq!(engine.snapshot(), frozen);
        assert_eq!(frozen.seconds_remaining, 3);
    }

    #[test]
    fn test_redundant_start_is_noop() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);
        engine.tick(secs(7));
        let before = engine.snapshot();

        engine.start(secs(7));
        assert_eq!(engine.snapshot(), before);
        // Still measured from the original start
        engine.tick(secs(10));
        assert_eq!(engine.phase_index(), 2);
    }

    #[test]
    fn test_restart_from_phase_zero_by_default() {
        let mut engine = triangle_engine(false);
        engine.start(Duration::ZERO);
        engine.tick(secs(7));
        engine.stop();
        assert_eq!(engine.phase_index(), 1);

        engine.start(secs(30));
        assert_eq!(engine.phase_index(), 0);
        assert_eq!(engine.seconds_remaining(), 5);
        assert_eq!(engine.progress(), 0.0);

        engine.tick(secs(35));
        assert_eq!(engine.phase_index(), 1);
    }

    #[test]
    fn test_resume_from_elapsed() {
        let mut engine = triangle_engine(true);
        engine.start(Duration::ZERO);
        engine.tick(ms(7500));
        engine.stop();
        assert_eq!(engine.phase_index(), 1);
        assert_eq!(engine.seconds_remaining(), 3);

        // Paused for a minute, then resumed
        engine.start(secs(60));
        assert_eq!(engine.phase_index(), 1);
        assert_eq!(engine.elapsed(), ms(2500));
        assert_eq!(engine.seconds_remaining(), 3);

        // The countdown keeps its half-second offset across the pause
        engine.tick(ms(60_499));
        assert_eq!(engine.seconds_remaining(), 3);
        engine.tick(ms(60_500));
        assert_eq!(engine.seconds_remaining(), 2);

        engine.tick(ms(62_500));
        assert_eq!(engine.phase_index(), 2);
        assert_eq!(engine.seconds_remaining(), 5);
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut engine = triangle_engine(true);
        let initial = engine.snapshot();

        engine.start(Duration::ZERO);
        engine.tick(secs(11));
        engine.reset();
        assert_eq!(engine.snapshot(), initial);
        assert_eq!(engine.cycles(), 0);

        // Safe to call again with nothing running
        engine.reset();
        assert_eq!(engine.snapshot(), initial);
    }

    #[test]
    fn test_mismatched_motion_rejected() {
        let table = PhaseTable::new(vec![phase(PhaseLabel::Inhale, 4, 5)]).unwrap();
        let result = PhaseTimerEngine::new(table, Shape::square(VIEWPORT, 24.0), false);
        assert_eq!(
            result.err(),
            Some(ConfigError::EdgeOutOfRange { index: 0, edge: 5, edges: 4 })
        );
    }
}
