//! Core domain types for ten-pin bowling.

use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of pins knocked down by a single throw (0-10).
pub type PinCount = u8;

/// Pins standing at the top of every frame.
pub const PIN_TOTAL: PinCount = 10;

/// Frames in a complete game.
pub const FRAME_COUNT: usize = 10;

/// An ordinal frame position, 1 through 10.
///
/// Construction is validated, so a `FrameNumber` in hand is always in
/// range and downstream code never re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// The opening frame.
    pub const FIRST: FrameNumber = FrameNumber(1);
    /// The tenth frame, which carries its own bonus-roll rules.
    pub const FINAL: FrameNumber = FrameNumber(10);

    /// Creates a frame number, rejecting anything outside 1-10.
    pub fn new(number: u8) -> Option<Self> {
        (1..=10).contains(&number).then_some(Self(number))
    }

    /// Returns the 1-based frame number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based index into a player's frame array.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Whether this is the tenth frame.
    pub fn is_final(self) -> bool {
        self.0 == 10
    }

    /// Maximum throws the frame may record: 2 in frames 1-9, 3 in the tenth.
    pub fn max_rolls(self) -> usize {
        if self.is_final() { 3 } else { 2 }
    }
}

impl std::fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's recorded pin counts for a single frame.
///
/// Holds the *resolved* counts produced by the roll parser (a spare is
/// already `10 - previous`), never raw notation tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Getters)]
pub struct Frame {
    /// Pin counts in throw order.
    rolls: Vec<PinCount>,
}

impl Frame {
    /// Creates a frame record from resolved pin counts.
    pub fn new(rolls: Vec<PinCount>) -> Self {
        Self { rolls }
    }
}
