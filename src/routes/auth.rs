/// Session Routes
///
/// Handles sign-in, the protected greeting, and token refresh.
///
/// Transport is asymmetric on purpose: the token travels in as a bearer
/// header and out as a cookie whose lifetime mirrors the token expiry.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::auth::{self, Claims, IssuedSession};
use crate::clock::Clock;
use crate::configuration::SessionSettings;
use crate::credential_store::CredentialStore;
use crate::error::{AppError, ErrorContext};

/// Sign-in request body. The plaintext password lives only for the duration
/// of the request and is handed straight to the verifier.
#[derive(Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

const TOKEN_COOKIE: &str = "token";

fn session_cookie(issued: &IssuedSession, now: DateTime<Utc>) -> Cookie<'static> {
    let ttl = (issued.expires_at - now).num_seconds();
    Cookie::build(TOKEN_COOKIE, issued.token.clone())
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::seconds(ttl))
        .finish()
}

/// POST /signin
///
/// Authenticate with username and password; on success the response sets a
/// session token cookie expiring with the token.
///
/// # Errors
/// - 400: malformed request body
/// - 401: unknown user or wrong password (indistinguishable)
/// - 500: signing failure or credential store fault
pub async fn sign_in(
    form: web::Json<SignInRequest>,
    store: web::Data<dyn CredentialStore>,
    clock: web::Data<dyn Clock>,
    session: web::Data<SessionSettings>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("sign_in");
    let now = clock.now_utc();

    let issued = auth::sign_in(
        store.get_ref(),
        &form.username,
        &form.password,
        session.get_ref(),
        now,
    )
    .await?;

    tracing::info!(
        request_id = %context.request_id,
        username = %issued.username,
        "User signed in"
    );

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&issued, now))
        .finish())
}

/// GET /welcome
///
/// Greets the authenticated user. Claims are injected by the session guard;
/// reaching this handler means the token's signature already verified.
pub async fn welcome(claims: web::ReqData<Claims>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body(format!("Welcome {}!", claims.sub)))
}

/// POST /refresh
///
/// Renew a session token whose remaining lifetime is inside the refresh
/// window (or already spent). Sets a fresh token cookie on success.
///
/// # Errors
/// - 401: token signature does not verify
/// - 400: malformed/absent token, or token not yet eligible
/// - 500: signing failure
pub async fn refresh(
    req: HttpRequest,
    clock: web::Data<dyn Clock>,
    session: web::Data<SessionSettings>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("token_refresh");
    let now = clock.now_utc();

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());
    let token = auth::extract_bearer(header);

    let issued = auth::refresh_session(token, session.get_ref(), now)?;

    tracing::info!(
        request_id = %context.request_id,
        username = %issued.username,
        "Session token refreshed"
    );

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&issued, now))
        .finish())
}
