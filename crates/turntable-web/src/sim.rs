//! Headless spin simulator.
//!
//! Replays a scripted drag against a [`Turntable`] and steps the coast loop
//! at a fixed frame interval, which is handy for tuning [`SpinConfig`]
//! without a browser.

use kurbo::{Point, Rect};
use turntable_core::{ManualFrames, PointerInput, SpinConfig, SpinSurface, Turntable};

/// Hard stop for runaway configurations.
const MAX_FRAMES: usize = 100_000;

/// A scripted pointer sample: angle around the record and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingSample {
    pub angle: f64,
    pub time_ms: f64,
}

/// One coast frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceFrame {
    pub time_ms: f64,
    pub rotation: f64,
    pub velocity: f64,
}

/// Result of a simulated fling.
#[derive(Debug, Clone, Default)]
pub struct SpinTrace {
    /// Velocity handed to the coast loop on release (deg/s).
    pub release_velocity: f64,
    /// Rotation at release.
    pub release_rotation: f64,
    pub release_time_ms: f64,
    pub frames: Vec<TraceFrame>,
    /// False if the loop was still running at the frame limit.
    pub settled: bool,
}

impl SpinTrace {
    pub fn final_rotation(&self) -> f64 {
        self.frames.last().map_or(self.release_rotation, |f| f.rotation)
    }

    /// Time from release until the record stopped.
    pub fn coast_ms(&self) -> f64 {
        self.frames.last().map_or(0.0, |f| f.time_ms - self.release_time_ms)
    }
}

#[derive(Default)]
struct NullSurface;

impl SpinSurface for NullSurface {
    fn apply_rotation(&mut self, _degrees: f64) {}
    fn set_dragging(&mut self, _dragging: bool) {}
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 200.0, 200.0)
}

fn on_record(angle: f64) -> Point {
    let center = bounds().center();
    let r = angle.to_radians();
    Point::new(center.x + 80.0 * r.cos(), center.y + 80.0 * r.sin())
}

/// Drag through `samples` (the first is the grab), release at the last one
/// and coast with frames every `frame_ms`.
pub fn simulate_fling(config: SpinConfig, samples: &[FlingSample], frame_ms: f64) -> SpinTrace {
    let mut table = Turntable::new(config);
    let mut surface = NullSurface;
    let mut frames = ManualFrames::new();
    let mut trace = SpinTrace::default();

    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        trace.settled = true;
        return trace;
    };

    let down = PointerInput::new(on_record(first.angle), first.time_ms);
    table.pointer_down(down, bounds(), &mut surface, &mut frames);
    for sample in &samples[1..] {
        let input = PointerInput::new(on_record(sample.angle), sample.time_ms);
        table.pointer_move(input, bounds(), &mut surface);
    }
    let up = PointerInput::new(on_record(last.angle), last.time_ms);
    table.pointer_up(up, &mut surface, &mut frames);

    trace.release_velocity = table.inertia_velocity();
    trace.release_rotation = table.rotation();
    trace.release_time_ms = last.time_ms;

    let mut now = last.time_ms;
    while let Some(handle) = frames.take_due() {
        if trace.frames.len() >= MAX_FRAMES {
            table.stop(&mut frames);
            log::warn!("Simulation stopped after {} frames", MAX_FRAMES);
            return trace;
        }
        now += frame_ms;
        table.on_frame(handle, now, &mut surface, &mut frames);
        trace.frames.push(TraceFrame {
            time_ms: now,
            rotation: table.rotation(),
            velocity: table.inertia_velocity(),
        });
    }

    trace.settled = true;
    log::debug!(
        "Fling released at {:.1}°/s settled after {} frames",
        trace.release_velocity,
        trace.frames.len()
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fling(step: f64) -> Vec<FlingSample> {
        (0..6)
            .map(|i| FlingSample {
                angle: i as f64 * step,
                time_ms: i as f64 * 16.0,
            })
            .collect()
    }

    #[test]
    fn test_fast_fling_coasts_and_settles() {
        let trace = simulate_fling(SpinConfig::default(), &fling(8.0), 1000.0 / 60.0);
        assert!(trace.settled);
        assert!(trace.release_velocity > 6.0);
        assert!((trace.release_rotation - 40.0).abs() < 1e-6);
        assert!(trace.final_rotation() > trace.release_rotation);
        assert_eq!(trace.frames.last().map(|f| f.velocity), Some(0.0));
        assert!(trace.coast_ms() > 0.0);
    }

    #[test]
    fn test_release_velocity_never_exceeds_cap() {
        let trace = simulate_fling(SpinConfig::default(), &fling(170.0), 16.0);
        assert!(trace.release_velocity.abs() <= 1080.0);
    }

    #[test]
    fn test_gentle_drag_does_not_coast() {
        let samples = [
            FlingSample { angle: 0.0, time_ms: 0.0 },
            FlingSample { angle: 1.0, time_ms: 1000.0 },
        ];
        let trace = simulate_fling(SpinConfig::default(), &samples, 16.0);
        assert!(trace.settled);
        assert!(trace.frames.is_empty());
        assert_eq!(trace.release_velocity, 0.0);
        assert_eq!(trace.final_rotation(), trace.release_rotation);
    }

    #[test]
    fn test_empty_script() {
        let trace = simulate_fling(SpinConfig::default(), &[], 16.0);
        assert!(trace.settled);
        assert!(trace.frames.is_empty());
    }
}
