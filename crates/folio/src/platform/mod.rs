//! Platform-specific host utilities.
//!
//! Code that needs different strategies on web (WASM) vs. desktop:
//!
//! - **Timers**: `gloo-timers` in the browser, `tokio::time` on desktop
//! - **Scroll tracking**: a `web-sys` window listener in the browser, an
//!   `eval` bridge into the webview on desktop
//! - **Scroll commands**: `eval` on both (smooth scrolling is a DOM feature)
//!
//! # Examples
//!
//! ```ignore
//! use crate::platform::{scroll_to_section, use_scroll_listener};
//!
//! use_scroll_listener(move |offset| show_top.set(offset > 400.0));
//! scroll_to_section("projects");
//! ```

use std::time::Duration;

use async_trait::async_trait;
use dioxus::prelude::*;
use folio_core::Pacer;

/// Suspend the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspend the current task for `duration`.
///
/// Web version: browser timer, clamped to `u32::MAX` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// [`Pacer`] backed by the platform timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformPacer;

#[async_trait(?Send)]
impl Pacer for PlatformPacer {
    async fn pause(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// Smooth-scroll the element with DOM id `id` into view.
pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth' }});",
        id
    ));
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

// =============================================================================
// Scroll tracking
// =============================================================================

/// Calls `handler` with the window's vertical offset on every scroll event.
///
/// The listener lives as long as the calling component and is removed when
/// it unmounts.
#[cfg(target_arch = "wasm32")]
pub fn use_scroll_listener(handler: impl FnMut(f64) + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let listener = use_hook(|| {
        let listener = web::ScrollListener::attach(handler);
        if listener.is_none() {
            dioxus::logger::tracing::warn!("No window available, scroll tracking disabled");
        }
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });
}

/// Calls `handler` with the window's vertical offset on every scroll event.
///
/// Desktop version: the webview forwards offsets over an `eval` channel.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_scroll_listener(mut handler: impl FnMut(f64) + 'static) {
    const WATCH_SCROLL_JS: &str = r#"
        window.__folioScroll = () => dioxus.send(window.scrollY);
        window.addEventListener('scroll', window.__folioScroll, { passive: true });
    "#;
    const UNWATCH_SCROLL_JS: &str = r#"
        if (window.__folioScroll) {
            window.removeEventListener('scroll', window.__folioScroll);
            delete window.__folioScroll;
        }
    "#;

    let task = use_hook(|| {
        spawn(async move {
            let mut eval = document::eval(WATCH_SCROLL_JS);
            while let Ok(offset) = eval.recv::<f64>().await {
                handler(offset);
            }
            dioxus::logger::tracing::debug!("Scroll channel closed");
        })
    });

    use_drop(move || {
        task.cancel();
        let _ = document::eval(UNWATCH_SCROLL_JS);
    });
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// A `scroll` listener registered on the window; removed on drop.
    pub struct ScrollListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ScrollListener {
        pub fn attach(mut handler: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = web_sys::window()?;

            let source = window.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                handler(source.scroll_y().unwrap_or(0.0));
            });

            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .ok()?;

            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sleep_waits() {
        let start = std::time::Instant::now();
        sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_platform_pacer_pauses() {
        let start = std::time::Instant::now();
        PlatformPacer.pause(Duration::from_millis(10)).await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
