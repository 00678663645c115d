use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use anyhow::anyhow;
use leptos::leptos_dom::logging::console_error;
use wasm_bindgen::{JsCast, prelude::Closure};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` driver that only runs while there is work to do.
///
/// `step` receives the milliseconds since the previous frame and returns
/// whether another frame is wanted. Once it says no the loop goes idle until
/// the next [`FrameLoop::kick`]. Dropping the loop cancels a pending frame.
pub struct FrameLoop {
    // we keep the RAF callback here so it can re-schedule itself each frame
    callback: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        // weak so the closure doesn't keep itself alive
        let slot = Rc::downgrade(&callback);
        let pending_for_cb = pending.clone();
        let mut last_ts: Option<f64> = None;

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            pending_for_cb.set(None);

            let delta = last_ts.map_or(0.0, |prev| (ts - prev).max(0.0));
            last_ts = Some(ts);

            if !step(delta) {
                last_ts = None;
                return;
            }

            let Some(slot) = slot.upgrade() else {
                return;
            };
            match request_frame(&slot) {
                Ok(id) => pending_for_cb.set(Some(id)),
                Err(e) => {
                    last_ts = None;
                    console_error(&format!("frame loop stalled: {e:#}"));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        Self { callback, pending }
    }

    /// Schedules a frame unless one is already pending.
    pub fn kick(&self) -> Result<()> {
        if self.pending.get().is_some() {
            return Ok(());
        }

        let id = request_frame(&self.callback)?;
        self.pending.set(Some(id));
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(slot: &RefCell<Option<FrameCallback>>) -> Result<i32> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let guard = slot.borrow();
    let cb = guard
        .as_ref()
        .ok_or_else(|| anyhow!("frame callback already released"))?;

    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("requestAnimationFrame failed: {e:?}"))
}
