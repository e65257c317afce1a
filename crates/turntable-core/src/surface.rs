//! Visual side of the spinning record.

use crate::error::SurfaceError;

/// Rendering and pointer-capture hooks the [`Turntable`](crate::Turntable)
/// drives. Physics never reads anything back from the surface.
pub trait SpinSurface {
    /// Render the cumulative rotation in degrees. Values are unbounded.
    fn apply_rotation(&mut self, degrees: f64);

    /// Toggle the "being dragged" styling marker.
    fn set_dragging(&mut self, dragging: bool);

    /// Whether the platform can bind a pointer to this surface.
    fn supports_pointer_capture(&self) -> bool {
        false
    }

    /// Route all further events of `pointer_id` to this surface.
    fn capture_pointer(&mut self, _pointer_id: i32) {}

    /// Undo [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, _pointer_id: i32) -> Result<(), SurfaceError> {
        Ok(())
    }
}
