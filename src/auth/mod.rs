/// Authentication module
///
/// Token codec, password verification, and the session issue/refresh flows.

mod claims;
mod jwt;
mod password;
mod session;

pub use claims::Claims;
pub use jwt::decode_token;
pub use jwt::encode_token;
pub use jwt::TokenError;
pub use password::hash_password;
pub use password::verify_password;
pub use session::extract_bearer;
pub use session::issue_session;
pub use session::refresh_session;
pub use session::sign_in;
pub use session::IssuedSession;
