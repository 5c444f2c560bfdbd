//! Browser access, with inert fallbacks so the crate still builds and tests natively.

use scoop::config::StorefrontConfig;
#[cfg(target_arch = "wasm32")]
use scoop::config::CSRF_META_NAME;
use tracing::warn;

const MISSING_TOKEN_WARNING: &str =
    "This page is missing its security token, so items cannot be added to or removed from the cart. Please reload the page.";

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://localhost:5000";

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_VIEWPORT_WIDTH: f64 = 1280.0;

/// Configuration for the shop serving this page.
#[cfg(target_arch = "wasm32")]
pub(crate) fn storefront_config() -> Result<StorefrontConfig, String> {
    let window = web_sys::window().ok_or_else(|| "Browser window is unavailable.".to_string())?;

    let origin = window
        .location()
        .origin()
        .map_err(|error| js_value_message(&error, "Unable to read the page origin."))?;

    let config = StorefrontConfig::new(&origin).map_err(|error| error.to_string())?;

    Ok(match csrf_token(&window) {
        Some(token) => config.with_csrf_token(token),
        None => config,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn storefront_config() -> Result<StorefrontConfig, String> {
    StorefrontConfig::new(NATIVE_ORIGIN).map_err(|error| error.to_string())
}

/// Banner text for a page served without an anti-forgery token, if this one was.
pub(crate) fn missing_token_warning(config: &StorefrontConfig) -> Option<&'static str> {
    config.csrf_token().is_none().then_some(MISSING_TOKEN_WARNING)
}

/// Write a warning to the browser console.
#[cfg(target_arch = "wasm32")]
pub(crate) fn console_warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn console_warn(message: &str) {
    warn!(message, "console warning outside the browser");
}

#[cfg(target_arch = "wasm32")]
fn csrf_token(window: &web_sys::Window) -> Option<String> {
    window
        .document()?
        .query_selector(&format!("meta[name=\"{CSRF_META_NAME}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Send the browser to `url`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(error) = window.location().set_href(url) {
        warn!(url, error = %js_value_message(&error, "navigation failed"), "unable to navigate");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn navigate(url: &str) {
    warn!(url, "navigation requested outside the browser");
}

/// Show a blocking notification.
#[cfg(target_arch = "wasm32")]
pub(crate) fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        warn!(error = %js_value_message(&error, "alert failed"), "unable to show notification");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn alert(message: &str) {
    warn!(message, "notification requested outside the browser");
}

/// Smoothly scroll the section with the given id into view.
#[cfg(target_arch = "wasm32")]
pub(crate) fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);

    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn scroll_to_section(_id: &str) {}

/// Top-left corner of the element the event was bound to.
#[cfg(target_arch = "wasm32")]
pub(crate) fn event_origin(event: &web_sys::MouseEvent) -> Option<(f64, f64)> {
    use wasm_bindgen::JsCast;

    let element = event
        .current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?;

    let rect = element.get_bounding_client_rect();

    Some((rect.left(), rect.top()))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn event_origin(_event: &web_sys::MouseEvent) -> Option<(f64, f64)> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn viewport_width() -> Option<f64> {
    Some(NATIVE_VIEWPORT_WIDTH)
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn wait_for_timeout(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn wait_for_timeout(_delay_ms: i32) {
    leptos::task::tick().await;
}

#[cfg(target_arch = "wasm32")]
fn js_value_message(value: &wasm_bindgen::JsValue, fallback: &str) -> String {
    value.as_string().unwrap_or_else(|| fallback.to_string())
}
