//! Drag-and-inertia state machine for the vinyl record.
//!
//! A [`Turntable`] turns pointer samples into a cumulative rotation, keeps a
//! smoothed angular velocity while the record is held and lets it coast
//! after release with frame-rate independent exponential decay.

use kurbo::{Point, Rect};

use crate::angle::{normalize_delta, pointer_angle};
use crate::config::SpinConfig;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::surface::SpinSurface;

/// `MouseEvent.button` value of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

/// One pointer sample, already translated out of the platform event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Position in the same coordinate space as the widget bounds.
    pub position: Point,
    pub button: i16,
    pub pointer_id: i32,
    /// Event time in milliseconds.
    pub timestamp_ms: f64,
}

impl PointerInput {
    /// Primary-button sample for pointer 1.
    pub fn new(position: Point, timestamp_ms: f64) -> Self {
        Self {
            position,
            button: PRIMARY_BUTTON,
            pointer_id: 1,
            timestamp_ms,
        }
    }

    /// Same sample with a different button.
    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    /// Same sample with a different pointer id.
    pub fn with_pointer_id(mut self, pointer_id: i32) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

/// Per-widget spin state.
#[derive(Debug, Clone)]
pub struct Turntable {
    config: SpinConfig,
    is_dragging: bool,
    /// Last pointer angle, degrees in (-180, 180].
    last_angle: f64,
    last_move_time: f64,
    /// Unbounded; only the rendered transform wraps.
    manual_rotation: f64,
    drag_velocity: f64,
    inertia_velocity: f64,
    /// Some iff a coast frame is scheduled.
    animation: Option<FrameHandle>,
    last_frame_time: f64,
    captured_pointer: Option<i32>,
}

impl Default for Turntable {
    fn default() -> Self {
        Self::new(SpinConfig::default())
    }
}

impl Turntable {
    /// Create a resting record.
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            is_dragging: false,
            last_angle: 0.0,
            last_move_time: 0.0,
            manual_rotation: 0.0,
            drag_velocity: 0.0,
            inertia_velocity: 0.0,
            animation: None,
            last_frame_time: 0.0,
            captured_pointer: None,
        }
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Cumulative rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.manual_rotation
    }

    pub fn drag_velocity(&self) -> f64 {
        self.drag_velocity
    }

    pub fn inertia_velocity(&self) -> f64 {
        self.inertia_velocity
    }

    /// Handle of the scheduled coast frame, if any.
    pub fn animation(&self) -> Option<FrameHandle> {
        self.animation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start a drag. Returns `true` when the gesture was taken and the
    /// platform's default handling (selection, scrolling) must be suppressed.
    pub fn pointer_down<S, F>(
        &mut self,
        input: PointerInput,
        bounds: Rect,
        surface: &mut S,
        frames: &mut F,
    ) -> bool
    where
        S: SpinSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if input.button != PRIMARY_BUTTON {
            return false;
        }

        self.stop(frames);
        self.inertia_velocity = 0.0;
        self.drag_velocity = 0.0;

        self.is_dragging = true;
        self.last_angle = pointer_angle(bounds, input.position);
        self.last_move_time = input.timestamp_ms;
        surface.set_dragging(true);

        // A second pointer taking over must not leave the first one captured.
        if self.captured_pointer.is_some_and(|id| id != input.pointer_id) {
            self.release_capture(surface);
        }
        if surface.supports_pointer_capture() {
            surface.capture_pointer(input.pointer_id);
            self.captured_pointer = Some(input.pointer_id);
        }

        log::trace!("Drag start at {:.1}°", self.last_angle);
        true
    }

    /// Follow the pointer while dragging. Returns `false` when idle.
    pub fn pointer_move<S>(&mut self, input: PointerInput, bounds: Rect, surface: &mut S) -> bool
    where
        S: SpinSurface + ?Sized,
    {
        if !self.is_dragging {
            return false;
        }

        let angle = pointer_angle(bounds, input.position);
        let delta = normalize_delta(angle - self.last_angle);
        let elapsed_ms = (input.timestamp_ms - self.last_move_time).max(self.config.min_sample_ms);
        let instant_velocity = delta / elapsed_ms * 1000.0;

        let alpha = self.config.velocity_blend;
        self.drag_velocity = self.drag_velocity * (1.0 - alpha) + instant_velocity * alpha;

        self.manual_rotation += delta;
        surface.apply_rotation(self.manual_rotation);

        self.last_angle = angle;
        self.last_move_time = input.timestamp_ms;
        true
    }

    /// Finish a drag on pointer-up or pointer-cancel and hand the smoothed
    /// velocity to the coast loop. Calling it while idle changes nothing.
    pub fn pointer_up<S, F>(&mut self, input: PointerInput, surface: &mut S, frames: &mut F) -> bool
    where
        S: SpinSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if !self.is_dragging {
            return false;
        }

        self.is_dragging = false;
        surface.set_dragging(false);
        self.release_capture(surface);

        let max = self.config.max_velocity;
        self.inertia_velocity = self.drag_velocity.clamp(-max, max);
        self.drag_velocity = 0.0;

        if self.inertia_velocity.abs() >= self.config.stop_threshold {
            log::trace!("Release at {:.1}°/s", self.inertia_velocity);
            self.start_inertia(input.timestamp_ms, frames);
        } else {
            self.inertia_velocity = 0.0;
        }
        true
    }

    /// Schedule the coast loop. No-op while a frame is already scheduled.
    /// If the scheduler refuses, the loop stays stopped and a later call
    /// may try again.
    pub fn start_inertia<F>(&mut self, now_ms: f64, frames: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if self.animation.is_some() {
            return;
        }
        self.last_frame_time = now_ms;
        self.animation = frames.request_frame();
        if self.animation.is_none() {
            log::warn!("Coast frame refused, record stops at {:.1}°", self.manual_rotation);
            self.inertia_velocity = 0.0;
        }
    }

    /// Run one coast step for the frame `handle`, fired at `now_ms`.
    ///
    /// Frames other than the currently scheduled one are ignored.
    pub fn on_frame<S, F>(
        &mut self,
        handle: FrameHandle,
        now_ms: f64,
        surface: &mut S,
        frames: &mut F,
    ) where
        S: SpinSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.animation != Some(handle) {
            return;
        }
        self.animation = None;

        let elapsed_ms = (now_ms - self.last_frame_time).clamp(0.0, self.config.max_frame_ms);
        self.last_frame_time = now_ms;
        let dt = elapsed_ms / 1000.0;

        if !self.is_dragging && self.inertia_velocity.abs() > 0.0 {
            self.manual_rotation += self.inertia_velocity * dt;
            surface.apply_rotation(self.manual_rotation);

            self.inertia_velocity *= self.config.decay_per_second.powf(dt);
            if self.inertia_velocity.abs() < self.config.stop_threshold {
                self.inertia_velocity = 0.0;
            }
        }

        if self.is_dragging || self.inertia_velocity.abs() > 0.0 {
            self.animation = frames.request_frame();
            if self.animation.is_none() {
                log::warn!("Coast frame refused, record stops at {:.1}°", self.manual_rotation);
                self.inertia_velocity = 0.0;
            }
        } else {
            log::trace!("Coast settled at {:.1}°", self.manual_rotation);
        }
    }

    /// Cancel the coast loop if one is scheduled.
    pub fn stop<F>(&mut self, frames: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if let Some(handle) = self.animation.take() {
            frames.cancel_frame(handle);
        }
    }

    fn release_capture<S>(&mut self, surface: &mut S)
    where
        S: SpinSurface + ?Sized,
    {
        if let Some(pointer_id) = self.captured_pointer.take() {
            // The pointer may already be gone; nothing to undo then.
            if let Err(e) = surface.release_pointer(pointer_id) {
                log::debug!("{}", e);
            }
        }
    }
}
