/// Token Codec
///
/// Encodes claims into an HMAC-signed token string and decodes them back.
/// The decoder pins HS256: a token declaring any other algorithm is
/// rejected before its signature is even considered. Expiry is NOT checked
/// here. An expired token with a valid signature decodes successfully, and
/// the caller decides what liveness means for its endpoint; this is what
/// keeps expired-but-authentic tokens refreshable.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Decode failures, split the way callers need to branch on them:
/// a bad signature is inauthentic (401 territory), everything else is a
/// structurally broken token (400 territory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    SignatureInvalid,
    Malformed,
}

/// Sign claims with the session secret.
///
/// # Errors
/// Fails only on signing misconfiguration, reported as an internal error.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, AppError> {
    let header = Header::new(Algorithm::HS256);
    encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::Internal(format!("Token signing failed: {}", e)))
}

/// Verify the signature and structure of a token and recover its claims.
///
/// Expired tokens decode successfully; `exp` is a semantic concern layered
/// by the caller, not a structural one.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        _ => TokenError::Malformed,
    })
}
