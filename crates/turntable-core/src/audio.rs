//! Background audio control model.
//!
//! Holds the volume, mute and playback state behind the slider and mute
//! button, including the one-shot "tap to unlock" retry used when the
//! browser refuses to autoplay.

/// Playback lifecycle of the background track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// No play attempt yet.
    #[default]
    Idle,
    Playing,
    /// Autoplay was refused; waiting for the first user gesture to retry.
    AwaitingGesture,
    /// The gesture-triggered retry is in flight.
    Retrying,
    /// The retry failed too. No further attempts are made.
    Blocked,
}

/// What to do after a play attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Install the one-time gesture listener.
    AwaitGesture,
    /// Give up.
    GiveUp,
}

/// Volume, mute and playback state.
#[derive(Debug, Clone)]
pub struct AudioControl {
    volume: f64,
    muted: bool,
    /// Volume restored when unmuting from a zero slider.
    last_audible: f64,
    playback: Playback,
}

impl AudioControl {
    /// Start unmuted at `initial_volume` (clamped to [0, 1]).
    pub fn new(initial_volume: f64) -> Self {
        let volume = clamp_volume(initial_volume);
        Self {
            volume,
            muted: volume == 0.0,
            last_audible: if volume > 0.0 { volume } else { 1.0 },
            playback: Playback::Idle,
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Slider position (0..=100) for the current volume.
    pub fn slider_value(&self) -> u32 {
        (self.volume * 100.0).round() as u32
    }

    /// Set the volume. Zero mutes, anything above zero unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = clamp_volume(volume);
        if self.volume > 0.0 {
            self.last_audible = self.volume;
            self.muted = false;
        } else {
            self.muted = true;
        }
    }

    /// Apply a raw range-input value in 0..=100. Returns the new volume, or
    /// `None` if the value could not be parsed.
    pub fn set_volume_from_slider(&mut self, raw: &str) -> Option<f64> {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        self.set_volume(value / 100.0);
        Some(self.volume)
    }

    /// Flip the mute state and return it. Unmuting a silent track restores
    /// the last audible volume.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if !self.muted && self.volume == 0.0 {
            self.volume = self.last_audible;
        }
        self.muted
    }

    /// A `play()` call resolved.
    pub fn play_started(&mut self) {
        self.playback = Playback::Playing;
    }

    /// A `play()` call was rejected.
    pub fn play_rejected(&mut self) -> Rejection {
        match self.playback {
            Playback::Idle | Playback::Playing => {
                self.playback = Playback::AwaitingGesture;
                Rejection::AwaitGesture
            }
            Playback::AwaitingGesture | Playback::Retrying | Playback::Blocked => {
                self.playback = Playback::Blocked;
                Rejection::GiveUp
            }
        }
    }

    /// A user gesture arrived. Returns `true` exactly once, when `play()`
    /// should be retried.
    pub fn on_gesture(&mut self) -> bool {
        if self.playback == Playback::AwaitingGesture {
            self.playback = Playback::Retrying;
            true
        } else {
            false
        }
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let audio = AudioControl::new(0.4);
        assert_eq!(audio.volume(), 0.4);
        assert!(!audio.is_muted());
        assert_eq!(audio.playback(), Playback::Idle);
        assert_eq!(audio.slider_value(), 40);

        assert_eq!(AudioControl::new(3.0).volume(), 1.0);
        assert!(AudioControl::new(0.0).is_muted());
    }

    #[test]
    fn test_slider_input() {
        let mut audio = AudioControl::new(0.4);
        assert_eq!(audio.set_volume_from_slider("75"), Some(0.75));
        assert_eq!(audio.set_volume_from_slider(" 150 "), Some(1.0));
        assert_eq!(audio.set_volume_from_slider("loud"), None);
        assert_eq!(audio.volume(), 1.0);
    }

    #[test]
    fn test_zero_volume_mutes_and_raise_unmutes() {
        let mut audio = AudioControl::new(0.5);
        audio.set_volume_from_slider("0");
        assert!(audio.is_muted());
        audio.set_volume_from_slider("20");
        assert!(!audio.is_muted());
        assert_eq!(audio.volume(), 0.2);
    }

    #[test]
    fn test_toggle_mute_restores_audible_volume() {
        let mut audio = AudioControl::new(0.6);
        assert!(audio.toggle_mute());
        assert_eq!(audio.volume(), 0.6);
        assert!(!audio.toggle_mute());

        audio.set_volume(0.0);
        assert!(audio.is_muted());
        assert!(!audio.toggle_mute());
        assert_eq!(audio.volume(), 0.6);
    }

    #[test]
    fn test_unlock_retries_once() {
        let mut audio = AudioControl::new(0.4);
        assert!(!audio.on_gesture());

        assert_eq!(audio.play_rejected(), Rejection::AwaitGesture);
        assert_eq!(audio.playback(), Playback::AwaitingGesture);
        assert!(audio.on_gesture());
        assert_eq!(audio.playback(), Playback::Retrying);
        // A second gesture while the retry is pending does nothing
        assert!(!audio.on_gesture());

        assert_eq!(audio.play_rejected(), Rejection::GiveUp);
        assert_eq!(audio.playback(), Playback::Blocked);
        assert!(!audio.on_gesture());
    }

    #[test]
    fn test_unlock_success() {
        let mut audio = AudioControl::new(0.4);
        audio.play_rejected();
        assert!(audio.on_gesture());
        audio.play_started();
        assert_eq!(audio.playback(), Playback::Playing);
        assert!(!audio.on_gesture());
    }
}
