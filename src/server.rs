use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect},
    routing::{get, get_service, post},
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::AppState;
use crate::api::{
    GuessRequest, GuessResponse, Message, ResetRequest, ResetResponse, StartRequest,
    StartResponse,
};
use crate::config::AppConfig;
use crate::game::{Game, resolve_turns};
use crate::session::lock_game;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "words.config.loaded",
        remote_enabled = config.words.remote_enabled,
        api_url = %config.words.api_url,
        fallback_words = config.words.fallback.len(),
        "Word source configured"
    );

    let state = AppState::from_config(Arc::clone(&config))?;
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router around `state`.
pub fn build_router(state: AppState) -> Router {
    let index = Path::new(&state.config.server.static_dir).join("index.html");

    // A very long timeout stands in for "disabled" so the layer stack keeps one type.
    let timeout_duration = if state.config.server.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(state.config.server.request_timeout_secs)
    };

    Router::new()
        .route("/", get(root_redirect))
        .route("/game", get_service(ServeFile::new(index)))
        .route("/start", post(start_game))
        .route("/guess", post(make_guess))
        .route("/reset", post(reset_game))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Send browsers to the game page.
async fn root_redirect() -> Redirect {
    Redirect::temporary("/game")
}

/// POST /start - Create (or replace) a session with a fresh word.
async fn start_game(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, (StatusCode, String)> {
    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let turns = resolve_turns(req.turns, state.config.game.default_turns);

    let word = state.words.fetch_word().await.map_err(|e| {
        tracing::error!(error = %e, "No word available to start a game");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to pick a word: {e}"),
        )
    })?;

    let game = Game::new(word, turns);
    let response = StartResponse {
        session_id: session_id.clone(),
        message: Message::started(),
        masked: game.masked(),
        turns: game.turns(),
        guessed: game.guessed(),
    };
    state.sessions.insert(session_id.clone(), game);

    info!(
        name: "game.started",
        session_id = %session_id,
        turns,
        active_sessions = state.sessions.len(),
        "Game started"
    );

    Ok(Json(response))
}

/// POST /guess - Apply one letter to an active session.
async fn make_guess(
    State(state): State<AppState>,
    Json(req): Json<GuessRequest>,
) -> Json<GuessResponse> {
    let Some(handle) = state.sessions.get(&req.session_id) else {
        debug!(session_id = %req.session_id, "Guess for unknown session");
        return Json(GuessResponse::message_only(Message::session_not_found()));
    };

    let (outcome, response) = {
        let mut game = lock_game(&handle);
        let outcome = game.guess(&req.guess_char);
        debug!(
            session_id = %req.session_id,
            guess = %req.guess_char,
            outcome = ?outcome,
            turns = game.turns(),
            "Guess applied"
        );
        (outcome, GuessResponse::from_outcome(outcome, &game))
    };

    if outcome.is_terminal() {
        state.sessions.remove_if_current(&req.session_id, &handle);
        info!(
            name: "game.finished",
            session_id = %req.session_id,
            outcome = ?outcome,
            "Game finished, session removed"
        );
    }

    Json(response)
}

/// POST /reset - Drop a session, whether or not it exists.
async fn reset_game(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Json<ResetResponse> {
    if let Some(id) = req.session_id.as_deref()
        && state.sessions.remove(id).is_some()
    {
        info!(name: "game.reset", session_id = %id, "Session reset");
    }

    Json(ResetResponse {
        message: Message::reset(),
    })
}
