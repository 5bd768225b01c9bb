//! Ten-pin bowling score REST service.
//!
//! A thin host around the [`tenpin_core`] rules engine:
//!
//! - **Store**: in-memory games keyed by generated id, shared behind a
//!   mutex ([`GameStore`]).
//! - **Routes**: start a game, submit one frame's rolls for its players,
//!   and fetch the computed scoreboard.
//! - **Middleware**: permissive CORS and a fixed-window rate limit.
//!
//! The engine does all rule work; this crate only moves validated data
//! between HTTP and the store.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod middleware;
mod routes;
mod store;

// Crate-level exports - configuration
pub use config::ServerConfig;

// Crate-level exports - API errors
pub use error::ApiError;

// Crate-level exports - middleware
pub use middleware::{RateLimiter, cors, rate_limit};

// Crate-level exports - routing
pub use routes::{
    AppState, NewPlayer, PlayerRolls, ScoreboardEntry, ScoreboardResponse, StartGameRequest,
    StartGameResponse, SubmitScoresRequest, SubmitScoresResponse, app, router,
};

// Crate-level exports - storage
pub use store::{Game, GameId, GameStore, Player, PlayerId};
