//! AJAX helpers for the operator admin endpoints and the keyword search endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers form posts with JSON on success and with a rendered
//! form fragment when validation fails, often on a 200 status. Responses are
//! therefore classified by body, not by status, into a `FormOutcome`.
//! Callers never see a panic; every failure is a typed value.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{FormOutcome, OperatorListItem, OperatorRecord, Suggestion};
#[cfg(any(test, feature = "hydrate"))]
use super::types::SuggestionsResponse;

/// Ordered `name=value` pairs, serialized like a browser form.
pub type FormPairs = Vec<(String, String)>;

/// Django's CSRF form field.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

#[cfg(feature = "hydrate")]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Encode pairs as `application/x-www-form-urlencoded`.
pub fn encode_form(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

/// Append encoded query pairs to `url`, respecting an existing query string.
pub fn with_query(url: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return url.to_owned();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{}", encode_form(pairs))
}

/// Make sure the CSRF field is present, adding it first if the form lacks it.
pub fn with_csrf(mut pairs: FormPairs, csrf_token: &str) -> FormPairs {
    if !pairs.iter().any(|(k, _)| k == CSRF_FIELD) {
        pairs.insert(0, (CSRF_FIELD.to_owned(), csrf_token.to_owned()));
    }
    pairs
}

#[cfg(any(test, feature = "hydrate"))]
fn edit_query(document_id: &str) -> FormPairs {
    vec![("document_id".to_owned(), document_id.to_owned())]
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_form(csrf_token: &str, id: &str) -> FormPairs {
    vec![
        (CSRF_FIELD.to_owned(), csrf_token.to_owned()),
        ("id".to_owned(), id.to_owned()),
    ]
}

#[cfg(any(test, feature = "hydrate"))]
fn suggestion_form(search_form: &[(String, String)], term: &str) -> FormPairs {
    let mut pairs = search_form.to_vec();
    pairs.push(("term".to_owned(), term.to_owned()));
    pairs
}

#[cfg(any(test, feature = "hydrate"))]
fn looks_like_markup(body: &str) -> bool {
    body.starts_with('<')
}

/// Sort a form response into success payload, replacement markup, or failure.
#[cfg(any(test, feature = "hydrate"))]
fn classify_form_response<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> FormOutcome<T> {
    let body = body.trim();
    if body.is_empty() {
        return FormOutcome::Failed(ApiError::EmptyBody);
    }
    if ok {
        if let Ok(payload) = serde_json::from_str::<T>(body) {
            return FormOutcome::Success(payload);
        }
    }
    if looks_like_markup(body) {
        return FormOutcome::Markup(body.to_owned());
    }
    if ok {
        FormOutcome::Failed(ApiError::UnexpectedBody)
    } else {
        FormOutcome::Failed(ApiError::Status(status))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::EmptyBody);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_form(url: &str, pairs: &[(String, String)]) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("X-Requested-With", "XMLHttpRequest")
        .body(encode_form(pairs))
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

#[cfg(feature = "hydrate")]
async fn get(url: &str) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::get(url)
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(transport)
}

#[cfg(feature = "hydrate")]
async fn read_form_outcome<T: DeserializeOwned>(resp: gloo_net::http::Response) -> FormOutcome<T> {
    let ok = resp.ok();
    let status = resp.status();
    // An unreadable body is treated like a missing one.
    let body = resp.text().await.unwrap_or_default();
    classify_form_response(ok, status, &body)
}

/// Load an operator for editing via `GET <edit_url>?document_id=<id>`.
///
/// The backend may answer with the JSON record or with its own prefilled
/// form fragment; both are usable by the edit dialog.
pub async fn load_operator(edit_url: &str, document_id: &str) -> FormOutcome<OperatorRecord> {
    #[cfg(feature = "hydrate")]
    {
        let url = with_query(edit_url, &edit_query(document_id));
        match get(&url).await {
            Ok(resp) => read_form_outcome(resp).await,
            Err(e) => FormOutcome::Failed(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (edit_url, document_id);
        FormOutcome::Failed(ApiError::Unavailable)
    }
}

/// Create or update an operator via `POST <edit_url>` with the serialized form.
pub async fn save_operator(edit_url: &str, form: &[(String, String)]) -> FormOutcome<()> {
    #[cfg(feature = "hydrate")]
    {
        match post_form(edit_url, form).await {
            Ok(resp) => match read_form_outcome::<serde_json::Value>(resp).await {
                FormOutcome::Success(_) => FormOutcome::Success(()),
                FormOutcome::Markup(markup) => FormOutcome::Markup(markup),
                FormOutcome::Failed(e) => FormOutcome::Failed(e),
            },
            Err(e) => FormOutcome::Failed(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (edit_url, form);
        FormOutcome::Failed(ApiError::Unavailable)
    }
}

/// Delete an operator via `POST <delete_url>` with `id=<id>`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn delete_operator(delete_url: &str, csrf_token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form(delete_url, &delete_form(csrf_token, id)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delete_url, csrf_token, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch autocomplete suggestions for `term` via `POST <suggestions_url>`.
///
/// The current search form is sent along so the backend can scope
/// suggestions to the selected templates.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not OK, or the body
/// does not decode.
pub async fn fetch_suggestions(
    suggestions_url: &str,
    search_form: &[(String, String)],
    term: &str,
) -> Result<Vec<Suggestion>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form(suggestions_url, &suggestion_form(search_form, term)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(transport)?;
        let parsed: SuggestionsResponse = decode_json(&body)?;
        Ok(parsed.labeled())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (suggestions_url, search_form, term);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every search operator via `GET <operator_list_url>`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not OK, or the body
/// does not decode.
pub async fn fetch_operators(operator_list_url: &str) -> Result<Vec<OperatorListItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get(operator_list_url).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(transport)?;
        decode_json(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = operator_list_url;
        Err(ApiError::Unavailable)
    }
}
