//! REST helpers for the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single request/response with no retry. Failures come back
//! as `Result<_, String>` carrying the server-provided `message`/`error`
//! body field when present, else a status-tagged fallback, so forms can
//! surface them inline without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::RegisterData;

/// Base URL of the auth API, overridable at compile time.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("AUTH_API_BASE").unwrap_or("/api")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(path: &str) -> String {
    format!("{}/auth/{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pick the user-facing message for a failed response: the server-provided
/// `message` (then `error`) body field when present, else a generic
/// status-tagged fallback.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|b| {
        b.get("message")
            .or_else(|| b.get("error"))
            .and_then(serde_json::Value::as_str)
    })
    .map_or_else(|| format!("Request failed ({status})."), ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: &gloo_net::http::Response) -> String {
    let body = resp.json::<serde_json::Value>().await.ok();
    error_message(resp.status(), body.as_ref())
}

/// Successful login response: the issued token plus the raw user payload.
///
/// The user stays a `serde_json::Value` here on purpose; the session applies
/// its field whitelist when constructing the stored `User` projection.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: serde_json::Value,
}

/// Authenticate via `POST /auth/login`, returning the issued token and user.
///
/// # Errors
///
/// Returns the server-provided message, or a generic fallback, when the
/// request fails or the response cannot be parsed.
pub async fn login(email: &str, password: &str) -> Result<LoginOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&auth_endpoint("login"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        resp.json::<LoginOutcome>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the server-provided message, or a generic fallback, on failure.
pub async fn register(data: &RegisterData) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_endpoint("signup"))
            .json(data)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err("not available on server".to_owned())
    }
}

/// Change the account password via `POST /auth/change-password` with the
/// session's bearer token.
///
/// # Errors
///
/// Returns the server-provided message, or a generic fallback, on failure.
pub async fn change_password(current: &str, new: &str, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "currentPassword": current,
            "newPassword": new
        });
        let resp = gloo_net::http::Request::post(&auth_endpoint("change-password"))
            .header("Authorization", &bearer_header(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new, token);
        Err("not available on server".to_owned())
    }
}

/// Ask the server whether `token` is still valid via `GET /auth/verify`.
///
/// # Errors
///
/// Transport failures and non-OK statuses surface as `Err`; the validator
/// treats them identically to an `{isValid:false}` answer (fail closed).
pub async fn verify_token(token: &str) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&auth_endpoint("verify"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        let body: crate::net::types::VerifyResponse =
            resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.is_valid)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
