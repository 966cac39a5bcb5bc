//! Contact form endpoint.
//!
//! `POST /api/contact` takes the form fields as a JSON object and answers
//! `{"status": "success" | "error", "message": ...}`. The page treats a
//! submission as delivered only when the response is 2xx and the status is
//! `success`, so every rejection carries both a 4xx code and `error`.
//!
//! `GET /api/contact` lists the messages held in the in-memory inbox, oldest
//! first, so a preview session can check what the form delivered.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use records::contact::SUCCESS_MESSAGE;
use records::{ContactForm, SubmitResponse};
use time::OffsetDateTime;

use crate::state::{AppState, ReceivedMessage};

/// `POST /api/contact`: validate and queue a contact message.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> (StatusCode, Json<SubmitResponse>) {
    let form = match body {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "contact body rejected");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(SubmitResponse::error(rejection.body_text())));
        }
    };
    if let Err(err) = form.validate() {
        tracing::info!(error = %err, "contact form invalid");
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(SubmitResponse::error(err.to_string())));
    }

    let subject = form.subject.clone();
    let evicted = state
        .inbox
        .write()
        .await
        .push(ReceivedMessage { form, received_at: OffsetDateTime::now_utc() });
    tracing::info!(%subject, evicted, "contact message received");
    (StatusCode::OK, Json(SubmitResponse::success(SUCCESS_MESSAGE)))
}

/// `GET /api/contact`: messages currently held in the inbox.
pub async fn list(State(state): State<AppState>) -> Json<Vec<ReceivedMessage>> {
    let inbox = state.inbox.read().await;
    Json(inbox.iter().cloned().collect())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
