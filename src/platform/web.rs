//! requestAnimationFrame-backed scheduler

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use super::{FrameHandle, FrameScheduler};

type FrameCallback = Rc<dyn Fn(FrameHandle)>;

/// Browser scheduler; every fired frame is delivered to one callback
#[derive(Default)]
pub struct WebScheduler {
    next_id: u64,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    /// Our handle -> browser request id, for frames not yet fired
    raf_ids: Rc<RefCell<HashMap<u64, i32>>>,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the frame callback
    pub fn set_callback(&self, callback: impl Fn(FrameHandle) + 'static) {
        *self.callback.borrow_mut() = Some(Rc::new(callback));
    }
}

impl FrameScheduler for WebScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);

        let Some(window) = web_sys::window() else {
            log::error!("No window; frame {} will never fire", handle.0);
            return handle;
        };

        let callback = self.callback.clone();
        let raf_ids = self.raf_ids.clone();
        let closure = Closure::once(move |_time: f64| {
            raf_ids.borrow_mut().remove(&handle.0);
            let cb = callback.borrow().clone();
            if let Some(cb) = cb {
                cb(handle);
            }
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.raf_ids.borrow_mut().insert(handle.0, id);
            }
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let Some(id) = self.raf_ids.borrow_mut().remove(&handle.0) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
