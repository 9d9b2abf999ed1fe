use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;

use crate::clock::Clock;
use crate::configuration::SessionSettings;
use crate::credential_store::CredentialStore;
use crate::logger::RequestLogger;
use crate::middleware::SessionGuard;
use crate::routes::{health_check, refresh, sign_in, welcome};

/// Assemble and start the server on the given listener.
///
/// All collaborators arrive by injection: the credential store and clock as
/// trait objects, the session settings (secret, durations) by value. The
/// server holds no other state; every request is handled independently.
pub fn run(
    listener: TcpListener,
    store: Arc<dyn CredentialStore>,
    clock: Arc<dyn Clock>,
    session: SessionSettings,
) -> Result<Server, std::io::Error> {
    let store = web::Data::from(store);
    let clock = web::Data::from(clock);
    let session_data = web::Data::new(session.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)

            // Shared read-only state
            .app_data(store.clone())
            .app_data(clock.clone())
            .app_data(session_data.clone())

            // Public routes
            .route("/health_check", web::get().to(health_check))
            .route("/signin", web::post().to(sign_in))
            .route("/refresh", web::post().to(refresh))

            // Protected routes (require a signature-valid session token)
            .service(
                web::scope("/welcome")
                    .wrap(SessionGuard::new(session.clone()))
                    .route("", web::get().to(welcome)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
