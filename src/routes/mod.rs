mod auth;
mod health_check;

pub use auth::refresh;
pub use auth::sign_in;
pub use auth::welcome;
pub use health_check::health_check;
