//! HTTP surface: the submission endpoint, the language selector, and the
//! static site itself.
//!
//! Routes:
//! - `POST /sendmail` — contact form relay
//! - `GET /language` — selector state for the stored preference
//! - `POST /language` — persist a selection and redirect to the localized page
//! - `GET /health` — liveness probe
//! - everything else — static files from the configured site root

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::contact::{Rejection, SubmissionForm};
use crate::i18n::{strings, Language};
use crate::mailer::Mailer;
use crate::{prefs, routing, sanitize};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub mailer: Arc<dyn Mailer>,
}

/// Build the router with all routes and the static-site fallback.
pub fn build_router(state: AppState) -> Router {
    let site_dir = state.config.site_dir.clone();

    Router::new()
        .route(
            "/sendmail",
            post(handle_submission).fallback(method_not_allowed),
        )
        .route("/language", get(selector_state).post(select_language))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(site_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Contact Submission ====================

async fn handle_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SubmissionForm>,
) -> Response {
    let language = form.submitted_language();

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(Rejection::Honeypot) => {
            // Same redirect a real send produces; bots get no tell.
            debug!("dropping submission flagged by the honeypot field");
            return found(&routing::confirmation_path(language));
        }
        Err(Rejection::MissingFields) => {
            return (StatusCode::BAD_REQUEST, strings::MISSING_FIELDS_ERROR).into_response();
        }
        Err(Rejection::InvalidEmail) => {
            return (StatusCode::BAD_REQUEST, strings::INVALID_EMAIL_ERROR).into_response();
        }
    };

    let email = submission.to_email();
    match state.mailer.send(&email).await {
        Ok(()) => {
            info!(language = submission.language.code(), "contact mail delivered");
            found(&routing::confirmation_path(submission.language))
        }
        Err(err) => {
            // Full detail stays in the log; the client sees a generic page.
            error!(error = %err, "contact mail delivery failed");
            delivery_error_page(submission.language, referer_path(&headers))
        }
    }
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// 302 with no body, as the site's form handling has always answered.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

fn delivery_error_page(language: Language, back: &str) -> Response {
    let strings = language.strings();
    let body = format!(
        "<html><body><p>{title} {hint}</p><p><a href=\"{back}\">{label}</a></p></body></html>",
        title = strings.delivery_error_title,
        hint = strings.delivery_error_hint,
        back = sanitize::escape_html_attribute(back),
        label = strings.go_back,
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}

// ==================== Language Selection ====================

#[derive(Debug, Deserialize)]
struct SelectLanguageForm {
    language: String,
    /// Path of the page the selector was used on; the Referer header is
    /// the fallback when the markup does not send it.
    #[serde(default)]
    from: Option<String>,
}

#[derive(Debug, Serialize)]
struct SelectorState {
    language: &'static str,
    options: Vec<prefs::SelectorOption>,
}

async fn selector_state(jar: CookieJar) -> impl IntoResponse {
    let current = prefs::preferred_language(&jar);
    Json(SelectorState {
        language: current.code(),
        options: prefs::selector_options(current),
    })
}

async fn select_language(
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<SelectLanguageForm>,
) -> Response {
    let Some(language) = Language::from_code(form.language.trim()) else {
        return (StatusCode::BAD_REQUEST, "Unsupported language code").into_response();
    };

    let current_path = match form.from.as_deref() {
        Some(path) => path_of(path),
        None => referer_path(&headers),
    };

    let jar = prefs::remember(jar, language);
    match routing::redirect_target(language, current_path) {
        Some(target) => (jar, Redirect::to(&target)).into_response(),
        // Already on the right page; persist the choice and stay put.
        None => (jar, StatusCode::NO_CONTENT).into_response(),
    }
}

// ==================== Misc ====================

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Path the request came from, per the Referer header. Defaults to the
/// site root when absent or unreadable.
fn referer_path(headers: &HeaderMap) -> &str {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .map(path_of)
        .unwrap_or("/")
}

/// Reduce a URL or path to its path component, dropping scheme, host,
/// query, and fragment.
fn path_of(url: &str) -> &str {
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or("/"),
        None => url,
    };
    &path[..path.find(['?', '#']).unwrap_or(path.len())]
}
