//! Turntable Core Library
//!
//! Platform-agnostic models behind the Turntable landing page: the vinyl
//! drag-and-inertia state machine, scroll reveal bookkeeping and the
//! background audio control.

pub mod angle;
pub mod audio;
pub mod config;
pub mod error;
pub mod frame;
pub mod reveal;
pub mod spin;
pub mod surface;

pub use angle::{normalize_delta, pointer_angle};
pub use audio::{AudioControl, Playback, Rejection};
pub use config::{AudioConfig, PageConfig, RevealConfig, SpinConfig, VinylConfig};
pub use error::{ConfigError, SurfaceError};
pub use frame::{FrameHandle, FrameScheduler, ManualFrames};
pub use reveal::{RevealMode, RevealTracker};
pub use spin::{PointerInput, Turntable, PRIMARY_BUTTON};
pub use surface::SpinSurface;
