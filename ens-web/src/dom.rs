use ens_core::{Delay, Direction, DocumentSurface, Locale, SurfaceError};
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled,
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current calendar year, from the browser clock or the host clock.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Local::now().year()
    }
}

/// Current value of the `<input>` an event was fired on.
#[must_use]
pub fn input_value(event: &web_sys::Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Checked state of the checkbox an event was fired on.
#[must_use]
pub fn input_checked(event: &web_sys::Event) -> Option<bool> {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.checked())
}

/// Writes `lang`/`dir` on `<html>` and the CSS `direction` of `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

fn surface_error(attribute: &'static str) -> impl FnOnce(JsValue) -> SurfaceError {
    move |err| SurfaceError::new(attribute, js_error_message(&err))
}

impl DocumentSurface for DomSurface {
    fn apply(&mut self, locale: Locale, direction: Direction) -> Result<(), SurfaceError> {
        let Some(doc) = document() else {
            log::debug!("no document; skipping lang={locale} dir={direction}");
            return Ok(());
        };
        let root = doc
            .document_element()
            .ok_or_else(|| SurfaceError::new("lang", "document has no root element"))?;
        root.set_attribute("lang", locale.code()).map_err(surface_error("lang"))?;
        root.set_attribute("dir", direction.as_str()).map_err(surface_error("dir"))?;
        if let Some(body) = doc.body() {
            body.style()
                .set_property("direction", direction.as_str())
                .map_err(surface_error("body direction"))?;
        }
        Ok(())
    }
}

/// `setTimeout`-backed [`Delay`] for the mock auth client.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomDelay;

#[async_trait::async_trait(?Send)]
impl Delay for DomDelay {
    async fn wait_ms(&self, duration_ms: u32) {
        let duration = i32::try_from(duration_ms).unwrap_or(i32::MAX);
        if let Err(err) = sleep_ms(duration).await {
            log::warn!("timer unavailable: {}", js_error_message(&err));
        }
    }
}
