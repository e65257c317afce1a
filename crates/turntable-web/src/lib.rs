//! Turntable Web
//!
//! Browser bindings for the Turntable landing page (scroll reveal, vinyl
//! spin, background audio, year stamp) and a headless spin simulator.

mod sim;

pub use sim::{simulate_fling, FlingSample, SpinTrace, TraceFrame};

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
mod vinyl;
#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
mod year;

#[cfg(target_arch = "wasm32")]
pub use error::{WebError, WebResult};
#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
