//! REST routes: start a game, submit frame rolls, fetch the scoreboard.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::middleware::{RateLimiter, cors, rate_limit};
use crate::store::{GameId, GameStore, Player, PlayerId};
use axum::extract::{Path, State};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tenpin_core::{CalculatedFrame, FrameNumber, PinCount, calculate_score, parse_frame_rolls};
use tracing::{debug, info, instrument};

/// Shared request state: the game store plus server configuration.
#[derive(Debug, Clone, new)]
pub struct AppState {
    store: GameStore,
    config: Arc<ServerConfig>,
}

/// Roster entry submitted when starting a game.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    /// Caller-chosen unique id for the player.
    pub player_id: PlayerId,
    /// Display name.
    pub name: String,
}

/// Request body for starting a game.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartGameRequest {
    /// The roster, in lane order.
    pub players: Vec<NewPlayer>,
}

/// Response for a started game.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    /// Generated game id; all further calls key on it.
    pub game_id: GameId,
    /// The stored roster with empty scorecards.
    pub players: Vec<Player>,
}

/// One player's raw roll tokens for a frame.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRolls {
    /// Player the rolls belong to.
    pub player_id: PlayerId,
    /// Raw notation tokens, e.g. `["7", "/"]` or `["X"]`.
    pub rolls: Vec<String>,
}

/// Request body for submitting a frame's rolls for every player.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitScoresRequest {
    /// One entry per player bowling this frame.
    pub rolls: Vec<PlayerRolls>,
}

/// Acknowledgement for a stored frame submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitScoresResponse {
    /// Always `true`; failures come back as error responses instead.
    pub success: bool,
}

/// One player's scored row on the scoreboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardEntry {
    /// Player's unique id.
    pub player_id: PlayerId,
    /// Display name.
    pub name: String,
    /// Ten calculated frames with glyphs and running totals.
    pub frames: Vec<CalculatedFrame>,
    /// Sum of every determined frame score.
    pub total: u32,
}

/// Response for the scoreboard query.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreboardResponse {
    /// One row per player, in lane order.
    pub scoreboard: Vec<ScoreboardEntry>,
}

/// Builds the game router on the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/game/start", post(start_game))
        .route(
            "/api/game/{game_id}/frame/{frame_number}/scores",
            post(submit_frame_scores),
        )
        .route("/api/game/{game_id}/scoreboard", get(get_scoreboard))
        .with_state(state)
}

/// Builds the full application: routes, CORS, and rate limiting.
pub fn app(config: &ServerConfig) -> Router {
    let limiter = RateLimiter::new(
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_secs),
    );
    let state = AppState::new(GameStore::new(), Arc::new(config.clone()));

    // Layers wrap bottom-up, so CORS (added last) sees every request
    // first and stamps headers on rate-limited responses too.
    router(state)
        .layer(from_fn_with_state(limiter, rate_limit))
        .layer(from_fn(cors))
}

/// Starts a new game with a validated roster.
#[instrument(skip(state, req), fields(players = req.players.len()))]
async fn start_game(
    State(state): State<AppState>,
    Json(req): Json<StartGameRequest>,
) -> Result<Json<StartGameResponse>, ApiError> {
    let (min, max) = (state.config.min_players, state.config.max_players);
    if req.players.len() < min || req.players.len() > max {
        return Err(ApiError::bad_request(format!(
            "Invalid number of players. Must be between {min} and {max}."
        )));
    }

    let mut players = Vec::with_capacity(req.players.len());
    for entry in req.players {
        let id = entry.player_id.trim().to_string();
        let name = entry.name.trim().to_string();
        if id.is_empty() || name.is_empty() {
            return Err(ApiError::bad_request(
                "Each player must have a playerId and a non-empty name",
            ));
        }
        players.push(Player::new(id, name));
    }

    let game = state.store.create_game(players);
    info!(game_id = %game.id, "Game started");

    Ok(Json(StartGameResponse {
        game_id: game.id,
        players: game.players,
    }))
}

/// Validates and stores one frame's rolls for a batch of players.
///
/// Every player's tokens are parsed before anything is stored, so a bad
/// submission never records a partial batch, let alone a partial frame.
#[instrument(skip(state, req), fields(game_id = %game_id, frame_number))]
async fn submit_frame_scores(
    State(state): State<AppState>,
    Path((game_id, frame_number)): Path<(String, u8)>,
    Json(req): Json<SubmitScoresRequest>,
) -> Result<Json<SubmitScoresResponse>, ApiError> {
    let frame = FrameNumber::new(frame_number)
        .ok_or_else(|| ApiError::bad_request("Invalid frame number"))?;

    if req.rolls.is_empty() {
        return Err(ApiError::bad_request(
            "Invalid request: rolls array is required",
        ));
    }

    let mut entries: Vec<(PlayerId, Vec<PinCount>)> = Vec::with_capacity(req.rolls.len());
    for entry in req.rolls {
        let pins = parse_frame_rolls(&entry.rolls, frame)?;
        debug!(player_id = %entry.player_id, ?pins, "Frame rolls validated");
        entries.push((entry.player_id, pins));
    }

    state.store.record_frames(&game_id, frame, entries)?;

    Ok(Json(SubmitScoresResponse { success: true }))
}

/// Computes the scoreboard for every player in a game.
#[instrument(skip(state), fields(game_id = %game_id))]
async fn get_scoreboard(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<ScoreboardResponse>, ApiError> {
    let game = state
        .store
        .get_game(&game_id)
        .ok_or_else(|| ApiError::not_found("Game not found"))?;

    let scoreboard = game
        .players
        .into_iter()
        .map(|player| {
            let score = calculate_score(&player.frames);
            ScoreboardEntry {
                player_id: player.id,
                name: player.name,
                frames: score.frames,
                total: score.total,
            }
        })
        .collect();

    Ok(Json(ScoreboardResponse { scoreboard }))
}
