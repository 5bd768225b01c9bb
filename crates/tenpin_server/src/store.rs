//! In-memory game storage.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tenpin_core::{FRAME_COUNT, Frame, FrameNumber, PinCount};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = String;

/// Unique identifier for a player.
pub type PlayerId = String;

/// A player in a game: identity plus one optional record per frame.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    /// Player's unique ID.
    #[serde(rename = "playerId")]
    pub id: PlayerId,
    /// Player's display name (may repeat across players).
    pub name: String,
    /// Ten frame slots; `None` until the frame is submitted.
    pub frames: Vec<Option<Frame>>,
}

impl Player {
    /// Creates a player with an empty scorecard.
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            frames: vec![None; FRAME_COUNT],
        }
    }
}

/// A bowling game: id, roster, and creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Game's unique ID.
    pub id: GameId,
    /// Players in lane order.
    pub players: Vec<Player>,
    /// When the game was started.
    pub created_at: DateTime<Utc>,
}

/// Stores all live games.
///
/// Games live in a mutex-guarded map; reads clone the game out and
/// mutations happen while the lock is held, so a frame submission is
/// all-or-nothing from any observer's point of view.
#[derive(Debug, Clone)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a game with a generated id and the given roster.
    #[instrument(skip(self, players))]
    pub fn create_game(&self, players: Vec<Player>) -> Game {
        let game = Game {
            id: Uuid::new_v4().to_string(),
            players,
            created_at: Utc::now(),
        };

        let mut games = self.games.lock().unwrap();
        games.insert(game.id.clone(), game.clone());

        info!(game_id = %game.id, players = game.players.len(), "Created new game");
        game
    }

    /// Gets a game by ID.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &str) -> Option<Game> {
        let games = self.games.lock().unwrap();
        let game = games.get(id).cloned();

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    /// Atomically records one frame's parsed rolls for a batch of players.
    ///
    /// Every player is located before anything is written, so an unknown
    /// player leaves the whole batch unrecorded. Re-submitting a frame
    /// overwrites the previous record for that frame.
    #[instrument(skip(self, entries), fields(frame = %frame, players = entries.len()))]
    pub fn record_frames(
        &self,
        game_id: &str,
        frame: FrameNumber,
        entries: Vec<(PlayerId, Vec<PinCount>)>,
    ) -> Result<(), ApiError> {
        let mut games = self.games.lock().unwrap();

        let game = games.get_mut(game_id).ok_or_else(|| {
            warn!(game_id, "Frame submitted for unknown game");
            ApiError::not_found("Game not found")
        })?;

        // Locate every target before the first write.
        let mut targets = Vec::with_capacity(entries.len());
        for (player_id, _) in &entries {
            let idx = game
                .players
                .iter()
                .position(|p| p.id == *player_id)
                .ok_or_else(|| {
                    warn!(game_id, player_id = %player_id, "Frame submitted for unknown player");
                    ApiError::not_found(format!("Player with ID {player_id} not found"))
                })?;
            targets.push(idx);
        }

        for ((player_id, pins), idx) in entries.into_iter().zip(targets) {
            let slot = &mut game.players[idx].frames[frame.index()];
            if slot.is_some() {
                debug!(game_id, player_id = %player_id, frame = %frame, "Overwriting previous frame record");
            }
            *slot = Some(Frame::new(pins));
        }

        info!(game_id, frame = %frame, "Frame recorded");
        Ok(())
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
