//! Server construction and middleware wiring.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use user_service::Trace;
#[cfg(debug_assertions)]
use user_service::doc::ApiDoc;
use user_service::domain::UserService;
use user_service::domain::ports::{FixtureUserRepository, UserRepository};
use user_service::inbound::http::error::json_error_handler;
use user_service::inbound::http::health::health;
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users::{create_user, get_user};
use user_service::outbound::persistence::{DbPool, DieselUserRepository, wait_until_connected};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the user repository based on configuration.
///
/// Uses the Diesel-backed implementation when a database URL is configured,
/// after the startup connectivity poll has seen one successful probe.
/// Without a database URL the in-memory fixture serves as storage.
///
/// # Errors
/// Returns [`std::io::Error`] when the pool cannot be built or the database
/// never becomes reachable before the deadline.
async fn build_repository(config: &AppConfig) -> std::io::Result<Arc<dyn UserRepository>> {
    match config.pool_config() {
        Some(pool_config) => {
            let pool = DbPool::new(pool_config)
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            wait_until_connected(
                &pool,
                config.connect_deadline(),
                config.connect_poll_interval(),
            )
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
            Ok(Arc::new(DieselUserRepository::new(pool)))
        }
        None => {
            warn!("no database URL configured, serving from the in-memory fixture repository");
            Ok(Arc::new(FixtureUserRepository::new()))
        }
    }
}

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(health)
        .service(get_user)
        .service(create_user);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the loaded configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener. Dropping
/// out of the awaited future performs actix's graceful stop: new connections
/// are refused while in-flight requests drain.
///
/// # Errors
/// Propagates [`std::io::Error`] when repository construction, socket
/// binding, or server startup fails.
pub async fn create_server(config: AppConfig) -> std::io::Result<Server> {
    let repository = build_repository(&config).await?;
    let state = web::Data::new(HttpState::new(
        UserService::new(repository),
        config.toggles(),
        config.name.clone(),
    ));

    let port = config.port();
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(("0.0.0.0", port))?
        .run();

    info!(port, "listening for requests");
    Ok(server)
}
