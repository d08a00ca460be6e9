//! [`PageHost`] over the browser window and the page's Swiper global.

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, JSON, Reflect};
use sitelang_core::{CarouselPlan, Element, PageHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::dom::WebElement;
use crate::swiper::SwiperCall;

/// Browser-backed page host.
pub(crate) struct WebHost {
    window: Window,
    root: WebElement,
}

impl WebHost {
    /// Host over the current window's document.
    pub(crate) fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
        let root = window
            .document()
            .and_then(|document| document.document_element())
            .ok_or_else(|| anyhow!("document has no root element"))?;
        Ok(Self {
            window,
            root: WebElement::new(root),
        })
    }

    fn run_swiper(&self, call: &SwiperCall) -> Result<(), JsValue> {
        let Some(container) = self.root.select(call.selector) else {
            return Ok(());
        };
        let container = container.inner();

        let live = Reflect::get(container, &JsValue::from_str("swiper"))?;
        if live.is_object() {
            let destroy: Function = Reflect::get(&live, &JsValue::from_str("destroy"))?.dyn_into()?;
            destroy.call2(&live, &JsValue::TRUE, &JsValue::TRUE)?;
        }

        let Some(options) = &call.options else {
            return Ok(());
        };
        let constructor = Reflect::get(&self.window, &JsValue::from_str("Swiper"))?;
        let Some(constructor) = constructor.dyn_ref::<Function>() else {
            tracing::debug!(selector = call.selector, "Swiper global missing; slider left static");
            return Ok(());
        };
        let options = JSON::parse(options)?;
        Reflect::construct(constructor, &Array::of2(container, &options))?;
        Ok(())
    }
}

/// Timer length in whole milliseconds, saturating.
pub(crate) fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[async_trait(?Send)]
impl PageHost for WebHost {
    type Element = WebElement;

    fn document(&self) -> WebElement {
        self.root.clone()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn viewport_width(&self) -> u32 {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0);
        width.clamp(0.0, f64::from(u32::MAX)) as u32
    }

    async fn pause(&self, delay: Duration) {
        TimeoutFuture::new(millis(delay)).await;
    }

    fn apply_carousel(&self, plan: &CarouselPlan) {
        let call = match SwiperCall::from_plan(plan) {
            Ok(call) => call,
            Err(err) => {
                tracing::error!(error = %err, "carousel options could not be encoded");
                return;
            }
        };
        if let Err(err) = self.run_swiper(&call) {
            tracing::error!(selector = call.selector, error = ?err, "Swiper initialisation failed");
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
