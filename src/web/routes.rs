use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;

use super::pages;
use super::AppState;
use crate::mail::{EmailAddress, OutgoingEmail};
use crate::reddit::FetchError;

/// Subject line of every kitten email.
pub const KITTEN_EMAIL_SUBJECT: &str = "You've received a kitten!";

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/show-a-kitten", get(show_kitten).post(show_kitten))
        .route("/email-a-kitten", get(email_form).post(email_kitten))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

/// Handler for the kitten display page (GET/POST /show-a-kitten).
async fn show_kitten(State(state): State<AppState>) -> Response {
    let kitten = match state.reddit.fetch_random_kitten().await {
        Ok(k) => k,
        Err(e) => return fetch_error_response(&e),
    };

    pages::kitten::render_kitten_page(&kitten).into_response()
}

/// Handler for the email form (GET /email-a-kitten).
async fn email_form() -> Response {
    pages::email::render_email_form(None, None).into_response()
}

#[derive(Debug, Deserialize)]
pub struct EmailKittenForm {
    email: Option<String>,
}

/// Handler for email submissions (POST /email-a-kitten).
///
/// Invalid or missing input re-renders the form; a valid address gets a
/// freshly fetched kitten mailed to it and a success page back.
async fn email_kitten(
    State(state): State<AppState>,
    Form(form): Form<EmailKittenForm>,
) -> Response {
    // A POST without the field behaves like a GET: show the empty form.
    let Some(raw) = form.email else {
        return pages::email::render_email_form(None, None).into_response();
    };

    let address = match EmailAddress::parse(&raw) {
        Ok(a) => a,
        Err(e) => {
            tracing::debug!("Rejected email submission: {e}");
            return pages::email::render_email_form(
                Some("Enter a valid email address."),
                Some(&raw),
            )
            .into_response();
        }
    };

    let kitten = match state.reddit.fetch_random_kitten().await {
        Ok(k) => k,
        Err(e) => return fetch_error_response(&e),
    };

    // The sender is read from configuration here, at send time, so the value
    // in effect for this request is the one stamped on this email.
    let email = OutgoingEmail {
        subject: KITTEN_EMAIL_SUBJECT.to_string(),
        body: pages::email::kitten_email_body(&kitten),
        from: state.config.server_email.clone(),
        to: address.clone(),
    };

    let num_messages = match state.mailer.send(email).await {
        Ok(n) => n,
        Err(e) => {
            tracing::error!("Failed to send kitten email: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email").into_response();
        }
    };

    let recipient = address.to_string();
    tracing::info!(recipient = %recipient, num_messages, "Kitten emailed");

    pages::email::render_email_success(&kitten, &recipient, num_messages).into_response()
}

async fn health() -> &'static str {
    "OK"
}

/// Map a fetch failure onto a response.
fn fetch_error_response(err: &FetchError) -> Response {
    match err {
        FetchError::NoKittens => {
            tracing::warn!("Search returned no qualifying kittens");
            (StatusCode::NOT_FOUND, "No kitten available right now").into_response()
        }
        e => {
            tracing::error!("Failed to fetch kitten: {e}");
            (StatusCode::BAD_GATEWAY, "Kitten source unavailable").into_response()
        }
    }
}
