//! Ten-pin bowling rules engine.
//!
//! This crate holds the two pure operations at the heart of the score
//! service:
//!
//! - **Roll parsing**: [`parse_frame_rolls`] turns a frame's raw notation
//!   tokens (`"7"`, `"/"`, `"X"`) into validated pin counts, enforcing the
//!   frame-position-specific legality rules (strikes stand alone in frames
//!   1-9, the tenth frame earns its third roll, and so on).
//! - **Scoring**: [`calculate_score`] walks a player's recorded frames and
//!   produces per-frame scoreboard glyphs and cumulative totals, resolving
//!   strike and spare bonuses by looking ahead into the flattened roll
//!   sequence. Totals stay undetermined until the bonus rolls exist.
//!
//! Both operations are synchronous, allocation-light, and own no state;
//! the hosting application supplies all inputs per call.
//!
//! # Example
//!
//! ```
//! use tenpin_core::{FrameNumber, Frame, parse_frame_rolls, calculate_score};
//!
//! let first = FrameNumber::new(1).unwrap();
//! let pins = parse_frame_rolls(&["7", "/"], first)?;
//! assert_eq!(pins, vec![7, 3]);
//!
//! let mut frames = vec![Some(Frame::new(pins))];
//! frames.push(Some(Frame::new(vec![3, 4])));
//!
//! let score = calculate_score(&frames);
//! assert_eq!(score.frames[0].display, "7 /");
//! assert_eq!(score.frames[0].cumulative_total, Some(13));
//! assert_eq!(score.total, 20);
//! # Ok::<(), tenpin_core::RollError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod frame;
mod roll;
mod score;

// Crate-level exports - errors
pub use error::RollError;

// Crate-level exports - domain types
pub use frame::{FRAME_COUNT, Frame, FrameNumber, PIN_TOTAL, PinCount};

// Crate-level exports - roll parsing
pub use roll::{RollToken, parse_frame_rolls};

// Crate-level exports - scoring
pub use score::{CalculatedFrame, PlayerScore, calculate_score};
