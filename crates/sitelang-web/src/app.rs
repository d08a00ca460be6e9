//! Browser bootstrap: logging, page assembly and event wiring.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use sitelang_core::{Element, InputEvent, PageHost, Site};
use sitelang_telemetry::{LogFormat, LoggingConfig, app_span, init_logging};
use tracing::Instrument;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::bootstrap::{
    CONFIG_SCRIPT_ID, ClickTarget, HOTSPOT_PRESSED_FILL, HOTSPOT_RELEASE_DELAY_MS,
    HOTSPOT_RELEASED_FILL, load_config,
};
use crate::dom::WebElement;
use crate::host::{WebHost, millis};
use crate::source::HttpSource;

type WebSite = Site<HttpSource, WebHost>;

/// Localize the current page and keep it interactive.
pub fn run_app() {
    console_error_panic_hook::set_once();

    let document = gloo::utils::document();
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    let loaded = load_config(raw.as_deref());
    let config = loaded.config;

    let logging = LoggingConfig {
        level: &config.log_level,
        format: LogFormat::from_name(config.log_format.as_deref()),
        build_sha: option_env!("SITELANG_BUILD_SHA").unwrap_or("dev"),
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::warn!(err.to_string());
    }
    let span = app_span();
    let _entered = span.enter();
    tracing::info!(locale = %config.default_locale, "sitelang starting");
    if let Some(err) = loaded.rejected {
        tracing::warn!(error = %err, "page configuration rejected; using defaults");
    }

    let host = match WebHost::new() {
        Ok(host) => host,
        Err(err) => {
            tracing::error!(error = %err, "page host unavailable");
            return;
        }
    };
    let site = Rc::new(Site::new(HttpSource::new(&config), host, &config));
    let root = site.localizer().host().document();

    wire_clicks(&site, &root);
    wire_hotspot_touch(&root);
    wire_keyboard(&site);
    wire_scroll(&site);
    wire_resize(&site);

    spawn_local(
        {
            let site = Rc::clone(&site);
            async move {
                if let Err(err) = site.localizer().start().await {
                    tracing::error!(
                        locale = %err.locale(),
                        error = %err,
                        "initial localization failed"
                    );
                }
            }
        }
        .instrument(span.clone()),
    );

    let preload_delay = config.preload_delay();
    let alternate = config.default_locale.other();
    spawn_local(
        async move {
            TimeoutFuture::new(millis(preload_delay)).await;
            site.localizer().preload(alternate).await;
        }
        .instrument(span.clone()),
    );
}

fn dispatch(site: &Rc<WebSite>, event: InputEvent) {
    let site = Rc::clone(site);
    spawn_local(async move { site.handle(event).await });
}

fn wire_clicks(site: &Rc<WebSite>, root: &WebElement) {
    for target in ClickTarget::ALL {
        for element in root.select_all(target.selector()) {
            let site = Rc::clone(site);
            let clicked = element.clone();
            EventListener::new(element.inner(), "click", move |event| {
                let Some(input) = target.event(&clicked) else {
                    return;
                };
                if target.prevents_default(&input) {
                    event.prevent_default();
                }
                dispatch(&site, input);
            })
            .forget();
        }
    }
}

fn wire_hotspot_touch(root: &WebElement) {
    for hotspot in root.select_all(ClickTarget::Hotspot.selector()) {
        let pressed = hotspot.clone();
        EventListener::new(hotspot.inner(), "touchstart", move |_| {
            pressed.set_style("fill", HOTSPOT_PRESSED_FILL);
        })
        .forget();

        let released = hotspot.clone();
        EventListener::new(hotspot.inner(), "touchend", move |_| {
            let released = released.clone();
            let _ = Timeout::new(HOTSPOT_RELEASE_DELAY_MS, move || {
                released.set_style("fill", HOTSPOT_RELEASED_FILL);
            })
            .forget();
        })
        .forget();
    }
}

fn wire_keyboard(site: &Rc<WebSite>) {
    let site = Rc::clone(site);
    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(&site, InputEvent::KeyDown { key: event.key() });
        }
    })
    .forget();
}

fn wire_scroll(site: &Rc<WebSite>) {
    let site = Rc::clone(site);
    EventListener::new(&gloo::utils::document(), "scroll", move |_| {
        let top = gloo::utils::window().scroll_y().unwrap_or(0.0);
        dispatch(&site, InputEvent::Scrolled { top });
    })
    .forget();
}

fn wire_resize(site: &Rc<WebSite>) {
    let delay = millis(site.resize_delay());
    let pending: RefCell<Option<Timeout>> = RefCell::new(None);
    let site = Rc::clone(site);
    EventListener::new(&gloo::utils::window(), "resize", move |_| {
        let armed_at = now();
        dispatch(&site, InputEvent::Resized { at: armed_at });
        let settled = {
            let site = Rc::clone(&site);
            Timeout::new(delay, move || {
                dispatch(&site, InputEvent::ResizeSettled { armed_at });
            })
        };
        // Dropping the previous handle cancels its timer.
        *pending.borrow_mut() = Some(settled);
    })
    .forget();
}

fn now() -> Duration {
    let millis = gloo::utils::window()
        .performance()
        .map_or(0.0, |performance| performance.now());
    Duration::from_secs_f64(millis.max(0.0) / 1000.0)
}
