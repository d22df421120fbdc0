//! Page-level helpers exported for hand-written scripts.
//!
//! None of the components depend on these; they are the page's small public
//! toolbox (smooth scroll to a section, clipboard copy, date formatting).

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use time::Date;
use time::macros::format_description;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateError {
    #[error("date parse failed: {0}")]
    Parse(String),

    #[error("date format failed: {0}")]
    Format(String),
}

/// Long US English form, e.g. `June 16, 2025`.
///
/// # Errors
///
/// Returns [`DateError::Format`] if the formatter rejects the date.
pub fn format_date(date: Date) -> Result<String, DateError> {
    date.format(format_description!("[month repr:long] [day padding:none], [year]"))
        .map_err(|e| DateError::Format(e.to_string()))
}

/// Parse `YYYY-MM-DD` and format it with [`format_date`].
///
/// # Errors
///
/// Returns [`DateError::Parse`] for malformed input.
pub fn parse_and_format_date(raw: &str) -> Result<String, DateError> {
    let date = Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| DateError::Parse(e.to_string()))?;
    format_date(date)
}

/// Smooth-scroll to the element matching `selector`. No-op when absent.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(selector: &str) {
    if let Some(el) = crate::util::dom::query(selector) {
        crate::util::dom::smooth_scroll_to(&el, None);
    }
}

/// Copy `text` to the clipboard.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    let promise = clipboard.write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => log::debug!("Copied to clipboard: {text}"),
            Err(e) => log::warn!("clipboard write failed: {e:?}"),
        }
    });
}

/// JS-facing [`parse_and_format_date`]; returns the input unchanged when it
/// cannot be parsed.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(raw: &str) -> String {
    match parse_and_format_date(raw) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::warn!("{e}");
            raw.to_owned()
        }
    }
}
