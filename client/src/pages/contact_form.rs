//! Community contact form: validate, optionally POST, then log locally.
//!
//! DESIGN
//! ======
//! The flow is a plain async function over the preference registry with the
//! POST passed in, so every branch (invalid input, rejected POST, storage
//! failure, success) is tested without a browser.
//!
//! A form without a `data-endpoint` attribute skips the POST and only writes
//! the submission log.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::collections::BTreeMap;
use std::future::Future;

use records::ContactForm;
use records::contact::{SAVE_FAILED_MESSAGE, SUCCESS_MESSAGE};
use time::OffsetDateTime;

use crate::net::api::SubmitOutcome;
use crate::state::preferences::PreferenceRegistry;
use crate::storage::KeyValueStore;

pub const FORM_ID: &str = "contact-form";
pub const ENDPOINT_ATTRIBUTE: &str = "data-endpoint";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// Class added next to `form-feedback`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Message shown under the form after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
    /// Clear the inputs; only after the submission was recorded.
    pub reset_form: bool,
}

impl Feedback {
    fn error(message: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Error, message: message.into(), reset_form: false }
    }

    fn success() -> Self {
        Self { kind: FeedbackKind::Success, message: SUCCESS_MESSAGE.to_owned(), reset_form: true }
    }
}

/// Endpoint from the form's attribute; blank means none.
#[must_use]
pub fn endpoint_from_attribute(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned()).filter(|value| !value.is_empty())
}

/// Run one submission. `post` is only called for valid input when an
/// endpoint is configured.
pub async fn submit<S, P, Fut>(
    prefs: &PreferenceRegistry<S>,
    fields: BTreeMap<String, String>,
    endpoint: Option<String>,
    now: OffsetDateTime,
    post: P,
) -> Feedback
where
    S: KeyValueStore,
    P: FnOnce(String, BTreeMap<String, String>) -> Fut,
    Fut: Future<Output = SubmitOutcome>,
{
    let form = ContactForm::from_fields(&fields);
    if let Err(err) = form.validate() {
        return Feedback::error(err.to_string());
    }
    if let Some(endpoint) = endpoint {
        if let SubmitOutcome::Rejected { message } = post(endpoint, form.to_fields()).await {
            return Feedback::error(message);
        }
    }
    match prefs.append_submission(form.to_fields(), now) {
        Ok(_) => Feedback::success(),
        Err(err) => {
            log::warn!("contact submission not saved: {err}");
            Feedback::error(SAVE_FAILED_MESSAGE)
        }
    }
}

/// Wire the form's submit event (hydrate only).
#[cfg(feature = "hydrate")]
pub fn attach(session: &super::Session) {
    use wasm_bindgen::JsCast;

    use crate::net::api::post_form;
    use crate::util::dom;

    let prefs = std::rc::Rc::clone(&session.prefs);
    dom::on_event(FORM_ID, "submit", move |event| {
        event.prevent_default();
        let Some(form) = dom::by_id(FORM_ID).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok()) else {
            return;
        };
        let fields = read_fields(&form);
        let endpoint = endpoint_from_attribute(form.get_attribute(ENDPOINT_ATTRIBUTE));
        let prefs = std::rc::Rc::clone(&prefs);
        wasm_bindgen_futures::spawn_local(async move {
            let feedback = submit(&prefs, fields, endpoint, OffsetDateTime::now_utc(), |endpoint, fields| async move {
                post_form(&endpoint, &fields).await
            })
            .await;
            if feedback.reset_form {
                form.reset();
            }
            dom::show_form_feedback(&feedback.message, feedback.kind.class());
        });
    });
}

#[cfg(feature = "hydrate")]
fn read_fields(form: &web_sys::HtmlFormElement) -> BTreeMap<String, String> {
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return BTreeMap::new();
    };
    ContactForm::FIELD_NAMES
        .into_iter()
        .filter_map(|name| data.get(name).as_string().map(|value| (name.to_owned(), value)))
        .collect()
}
