use std::{env, sync::Arc};

use envelope::Responder;
use notes_service::{
    api::{
        handler::{health, note},
        router::build_router,
        state::NotesAppState,
    },
    config::ServiceConfig,
    infrastructure::note::InMemoryNoteRepository,
};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::headpat,
        note::find_all,
        note::find_by_id,
        note::create,
        note::delete,
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Notes", description = "Note management"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    let _guard = notes_service::telemetry::init_telemetry("notes-service");

    let config_path = env::var("NOTES_CONFIG_PATH").unwrap_or_else(|_| "notes.toml".to_string());
    let config = ServiceConfig::load(&config_path)
        .expect("Failed to load notes config")
        .with_env_overrides();

    if config.responder.debug {
        tracing::warn!("Responder debug mode is on, error details will be exposed in responses");
    }

    let state = Arc::new(NotesAppState {
        note_repo: Arc::new(InMemoryNoteRepository::new()),
        responder: Arc::new(Responder::from_config(&config.responder)),
    });

    let app = build_router(state)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // tracing log (turn request into info level)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        );

    let port = config.port;
    tracing::info!("notes-service listening on 0.0.0.0:{port}");

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(notes_service::shutdown::shutdown_signal())
        .await
        .expect("Oppsie! Server crashed!");

    tracing::info!("notes-service shut down");
}
