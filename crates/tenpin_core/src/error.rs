//! Roll validation errors.

use crate::frame::{FrameNumber, PinCount};
use derive_more::{Display, Error};

/// A rejected frame submission.
///
/// Every variant is a user-correctable input problem, raised before any
/// pin count is recorded; the parser never returns a partial frame. The
/// display text is what callers surface verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RollError {
    /// Zero tokens, or more tokens than the frame position allows.
    #[display("Invalid number of rolls for frame {frame}: expected up to {max} rolls, got {got}")]
    WrongRollCount {
        /// Frame the submission targeted.
        frame: FrameNumber,
        /// Maximum rolls the frame may hold.
        max: usize,
        /// Rolls actually submitted (after trimming empties).
        got: usize,
    },

    /// A token that is not `X`, `/`, or an integer 0-10.
    #[display("Invalid roll value: {token}")]
    InvalidToken {
        /// The offending raw token.
        token: String,
    },

    /// `/` as a frame's first token; a spare completes a previous throw.
    #[display("A spare cannot be the first roll of a frame")]
    SpareOnFirstRoll,

    /// `/` directly after a resolved strike; nothing is left to pick up.
    #[display("Cannot have a spare after a strike")]
    SpareAfterStrike,

    /// A strike in frames 1-9 accompanied by a second roll.
    #[display("A strike in frames 1-9 should only have one roll")]
    StrikeNotAlone,

    /// Two raw counts summing past 10 without going through spare notation.
    #[display("Invalid rolls: {first} + {second} exceeds 10 without a spare")]
    PinsExceedFrame {
        /// First resolved pin count.
        first: PinCount,
        /// Second resolved pin count.
        second: PinCount,
    },

    /// A frames-1-9 submission that is neither a lone strike nor two rolls.
    #[display("Invalid rolls for frame: expected 1 roll for a strike or 2 rolls for spare/open")]
    StandardFrameShape,

    /// A tenth-frame strike or spare submitted without its third roll.
    #[display("10th frame with a strike or spare requires 3 rolls")]
    BonusRollRequired,

    /// A tenth-frame third roll without an earning strike or spare.
    #[display("Third roll in 10th frame is only allowed after a strike or spare")]
    BonusRollNotEarned,

    /// A tenth-frame submission that is neither 2 nor 3 rolls.
    #[display("Invalid rolls for 10th frame: expected 2 rolls for an open frame or 3 rolls for a strike/spare")]
    FinalFrameShape,
}
