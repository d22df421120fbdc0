//! Form-relay transport for the contact form.
//!
//! The page posts its contact form to a hosted relay service named by the
//! form's `action` attribute. The relay answers with JSON; any 2xx status is
//! success. No retry and no explicit timeout: a failed submission is
//! reported once and the visitor resubmits by hand.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to [`SubmitError`]. Callers show one generic message
//! for all variants; the variant and any relay-provided detail only reach
//! the console log.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use async_trait::async_trait;
use serde::Deserialize;

use crate::state::contact::ContactPayload;

/// Header sent so the relay answers with JSON instead of a redirect page.
pub const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The form has no usable `action` URL.
    #[error("form has no action endpoint")]
    MissingEndpoint,

    /// The relay answered outside the 2xx range.
    #[error("form submission failed: status {status}")]
    Rejected { status: u16 },

    /// The request never completed.
    #[error("form submission transport error: {0}")]
    Transport(String),
}

/// Raw relay answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport that delivers one form submission.
#[async_trait(?Send)]
pub trait FormRelay {
    /// POST `payload` to `endpoint` as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] when the request does not complete.
    async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<RelayResponse, SubmitError>;
}

#[derive(Debug, Default, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorItem>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorItem {
    message: String,
}

/// Human-readable detail from a relay error body, if it carries any.
#[must_use]
pub fn relay_error_detail(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    let messages = parsed.errors.into_iter().map(|e| e.message).collect::<Vec<_>>();
    if messages.is_empty() {
        return None;
    }
    Some(messages.join("; "))
}

/// Resolve the form's `action` attribute to an endpoint.
///
/// # Errors
///
/// Returns [`SubmitError::MissingEndpoint`] when the attribute is absent or
/// blank.
pub fn endpoint_from_action(action: Option<&str>) -> Result<&str, SubmitError> {
    action
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(SubmitError::MissingEndpoint)
}

/// Deliver `payload` through `relay` and classify the answer.
///
/// # Errors
///
/// Returns [`SubmitError`] for a missing endpoint, a non-2xx status, or a
/// transport failure.
pub async fn deliver<R>(relay: &R, action: Option<&str>, payload: &ContactPayload) -> Result<(), SubmitError>
where
    R: FormRelay + ?Sized,
{
    let endpoint = endpoint_from_action(action)?;
    let response = relay.post(endpoint, payload).await?;
    if response.is_success() {
        return Ok(());
    }
    if let Some(detail) = relay_error_detail(&response.body) {
        log::warn!("relay rejected submission ({}): {detail}", response.status);
    }
    Err(SubmitError::Rejected { status: response.status })
}

/// `gloo-net` transport posting the page's `<form>` element.
///
/// Posting the element itself keeps any hidden relay fields (honeypots,
/// redirect hints) the page author added next to the four visible ones.
#[cfg(feature = "browser")]
pub struct GlooRelay {
    form: web_sys::HtmlFormElement,
}

#[cfg(feature = "browser")]
impl GlooRelay {
    #[must_use]
    pub fn for_form(form: web_sys::HtmlFormElement) -> Self {
        Self { form }
    }

    fn form_data(&self, payload: &ContactPayload) -> Result<web_sys::FormData, SubmitError> {
        if let Ok(data) = web_sys::FormData::new_with_form(&self.form) {
            return Ok(data);
        }
        let data = web_sys::FormData::new().map_err(|e| SubmitError::Transport(format!("{e:?}")))?;
        for (name, value) in payload.fields() {
            data.append_with_str(name, value)
                .map_err(|e| SubmitError::Transport(format!("{e:?}")))?;
        }
        Ok(data)
    }
}

#[cfg(feature = "browser")]
#[async_trait(?Send)]
impl FormRelay for GlooRelay {
    async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<RelayResponse, SubmitError> {
        let body = self.form_data(payload)?;
        let (name, value) = ACCEPT_JSON;
        let resp = gloo_net::http::Request::post(endpoint)
            .header(name, value)
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(RelayResponse { status, body })
    }
}
