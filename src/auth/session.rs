/// Session Issuance and Refresh
///
/// The flows behind the three endpoints: credential sign-in, bearer-token
/// extraction for protected access, and the sliding-window refresh policy.
/// Everything here is pure over a supplied `now`; handlers obtain the
/// instant from the process clock and tests pass their own.

use chrono::{DateTime, Duration, Utc};

use crate::auth::claims::Claims;
use crate::auth::jwt::{self, TokenError};
use crate::auth::password::verify_password;
use crate::configuration::SessionSettings;
use crate::credential_store::CredentialStore;
use crate::error::{AppError, AuthError, RequestError};

/// A freshly minted session token together with its expiry instant, so the
/// transport layer can mirror the expiry client-side (cookie lifetime).
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Mint a session token for an already-authenticated username.
pub fn issue_session(
    username: &str,
    settings: &SessionSettings,
    now: DateTime<Utc>,
) -> Result<IssuedSession, AppError> {
    let claims = Claims::new(username, settings.token_ttl_seconds, now);
    let token = jwt::encode_token(&claims, &settings.secret)?;

    Ok(IssuedSession {
        username: username.to_string(),
        token,
        expires_at: now + Duration::seconds(settings.token_ttl_seconds),
    })
}

/// Verify credentials against the store and mint a session token.
///
/// An unknown username and a wrong password are indistinguishable in the
/// result; both collapse into `InvalidCredentials`. Store faults propagate
/// as internal errors without retry.
pub async fn sign_in(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
    settings: &SessionSettings,
    now: DateTime<Utc>,
) -> Result<IssuedSession, AppError> {
    let verifier = store.find_verifier(username).await?;

    let verified = match &verifier {
        Some(v) => verify_password(password, &v.password_hash),
        None => false,
    };
    if !verified {
        return Err(AuthError::InvalidCredentials.into());
    }

    issue_session(username, settings, now)
}

/// Renew a session token close to (or past) its expiry.
///
/// Outcomes:
/// - bad signature: unauthorized;
/// - structurally broken token (including an absent one): malformed;
/// - more than the refresh window remaining: not yet eligible;
/// - otherwise, including any amount of time past expiry: a new token for
///   the same username, with a full TTL from `now`.
///
/// The lower bound forces clients to hold a token for most of its lifetime
/// before renewing; there is deliberately no upper bound after expiry.
pub fn refresh_session(
    token: Option<&str>,
    settings: &SessionSettings,
    now: DateTime<Utc>,
) -> Result<IssuedSession, AppError> {
    let claims = jwt::decode_token(token.unwrap_or(""), &settings.secret).map_err(|e| match e {
        TokenError::SignatureInvalid => AppError::Auth(AuthError::SignatureInvalid),
        TokenError::Malformed => AppError::Request(RequestError::MalformedToken),
    })?;

    if claims.remaining_seconds(now) > settings.refresh_window_seconds {
        return Err(RequestError::RefreshNotDue.into());
    }

    issue_session(&claims.sub, settings, now)
}

/// Pull the token out of an `Authorization` header value.
///
/// Exactly two space-separated parts are required ("Bearer <token>");
/// anything else is treated as no token at all.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let parts: Vec<&str> = header?.split(' ').collect();
    if parts.len() == 2 {
        Some(parts[1])
    } else {
        None
    }
}
