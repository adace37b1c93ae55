//! Scroll position sampling and the window scroll listener.

/// Distance from the document bottom, in CSS pixels, at which the next page is requested.
pub const SCROLL_THRESHOLD: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub inner_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ViewportMetrics {
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.inner_height + self.scroll_y >= self.document_height - threshold
    }
}

#[cfg(feature = "web")]
pub use browser::{sample, ScrollListener};

/// Without a browser there is nothing to sample.
#[cfg(not(feature = "web"))]
pub fn sample() -> Option<ViewportMetrics> {
    None
}

#[cfg(feature = "web")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, Window};

    use super::ViewportMetrics;

    pub fn sample() -> Option<ViewportMetrics> {
        let window = web_sys::window()?;
        let inner_height = window.inner_height().ok()?.as_f64()?;
        let scroll_y = window.scroll_y().ok()?;
        let root = window
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(ViewportMetrics {
            inner_height,
            scroll_y,
            document_height: f64::from(root.offset_height()),
        })
    }

    /// A `scroll` listener on the window, removed again on drop.
    pub struct ScrollListener {
        window: Window,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn attach(on_scroll: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::<dyn FnMut()>::new(on_scroll);

            if let Err(err) = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "Failed to register scroll listener");
                return None;
            }

            tracing::debug!("Scroll listener registered");
            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
            tracing::debug!("Scroll listener removed");
        }
    }
}
