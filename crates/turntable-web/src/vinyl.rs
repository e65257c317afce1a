//! DOM binding for the spinning vinyl record.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use turntable_core::{
    FrameHandle, FrameScheduler, PointerInput, SpinSurface, SurfaceError, Turntable, VinylConfig,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, PointerEvent, Window};

use crate::dom;
use crate::error::WebResult;

/// Renders rotation through a CSS custom property and owns pointer capture.
struct DomSurface {
    container: HtmlElement,
    disc: HtmlElement,
    rotation_property: String,
    dragging_class: String,
    capture: bool,
}

impl DomSurface {
    fn bounds(&self) -> Rect {
        let rect = self.container.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }
}

impl SpinSurface for DomSurface {
    fn apply_rotation(&mut self, degrees: f64) {
        let value = format!("{:.3}deg", degrees);
        if let Err(e) = self.disc.style().set_property(&self.rotation_property, &value) {
            log::warn!("Failed to set {}: {:?}", self.rotation_property, e);
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        let classes = self.container.class_list();
        let result = if dragging {
            classes.add_1(&self.dragging_class)
        } else {
            classes.remove_1(&self.dragging_class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle {}: {:?}", self.dragging_class, e);
        }
    }

    fn supports_pointer_capture(&self) -> bool {
        self.capture
    }

    fn capture_pointer(&mut self, pointer_id: i32) {
        if let Err(e) = self.container.set_pointer_capture(pointer_id) {
            log::debug!("Pointer capture refused: {:?}", e);
        }
    }

    fn release_pointer(&mut self, pointer_id: i32) -> Result<(), SurfaceError> {
        if !self.container.has_pointer_capture(pointer_id) {
            return Ok(());
        }
        self.container
            .release_pointer_capture(pointer_id)
            .map_err(|e| SurfaceError::Release {
                pointer_id,
                reason: format!("{:?}", e),
            })
    }
}

/// `requestAnimationFrame` backed scheduler sharing one frame callback.
struct RafScheduler {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

struct VinylWidget {
    table: Turntable,
    surface: DomSurface,
    frames: RafScheduler,
}

fn pointer_input(event: &PointerEvent) -> PointerInput {
    PointerInput {
        position: Point::new(event.client_x() as f64, event.client_y() as f64),
        button: event.button(),
        pointer_id: event.pointer_id(),
        timestamp_ms: event.time_stamp(),
    }
}

/// Make the record draggable. Fails if the container is missing.
pub fn mount(window: &Window, document: &Document, config: &VinylConfig) -> WebResult<()> {
    let container: HtmlElement = dom::query(document, &config.container_selector)?;
    let disc = match dom::query::<HtmlElement>(document, &config.disc_selector) {
        Ok(disc) => disc,
        Err(_) => container.clone(),
    };
    let capture = dom::has_property(&container, "setPointerCapture");

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let widget = Rc::new(RefCell::new(VinylWidget {
        table: Turntable::new(config.spin),
        surface: DomSurface {
            container: container.clone(),
            disc,
            rotation_property: config.rotation_property.clone(),
            dragging_class: config.dragging_class.clone(),
            capture,
        },
        frames: RafScheduler {
            window: window.clone(),
            callback: slot.clone(),
        },
    }));

    let on_frame = widget.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let mut guard = on_frame.borrow_mut();
        let VinylWidget { table, surface, frames } = &mut *guard;
        if let Some(handle) = table.animation() {
            table.on_frame(handle, now, surface, frames);
        }
    }) as Box<dyn FnMut(f64)>));

    let on_down = widget.clone();
    dom::listen(&container, "pointerdown", move |event| {
        let Ok(event) = event.dyn_into::<PointerEvent>() else {
            return;
        };
        let mut guard = on_down.borrow_mut();
        let VinylWidget { table, surface, frames } = &mut *guard;
        let bounds = surface.bounds();
        if table.pointer_down(pointer_input(&event), bounds, surface, frames) {
            event.prevent_default();
        }
    })?;

    // Moves and releases are watched on the window so a drag that leaves the
    // record still ends when capture is unavailable.
    let on_move = widget.clone();
    dom::listen(window, "pointermove", move |event| {
        let Ok(event) = event.dyn_into::<PointerEvent>() else {
            return;
        };
        let mut guard = on_move.borrow_mut();
        let VinylWidget { table, surface, .. } = &mut *guard;
        if table.is_dragging() {
            let bounds = surface.bounds();
            table.pointer_move(pointer_input(&event), bounds, surface);
        }
    })?;

    for event_type in ["pointerup", "pointercancel"] {
        let on_up = widget.clone();
        dom::listen(window, event_type, move |event| {
            let Ok(event) = event.dyn_into::<PointerEvent>() else {
                return;
            };
            let mut guard = on_up.borrow_mut();
            let VinylWidget { table, surface, frames } = &mut *guard;
            table.pointer_up(pointer_input(&event), surface, frames);
        })?;
    }

    log::info!(
        "Vinyl mounted on {} (pointer capture: {})",
        config.container_selector,
        capture
    );
    Ok(())
}
