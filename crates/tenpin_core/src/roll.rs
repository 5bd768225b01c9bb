//! Roll notation parsing and frame-position validation.

use crate::error::RollError;
use crate::frame::{FrameNumber, PIN_TOTAL, PinCount};
use std::str::FromStr;
use tracing::{instrument, warn};

/// A raw notation token for one throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollToken {
    /// All ten pins on the frame's first throw (`X`).
    Strike,
    /// The rest of the pins after the previous throw (`/`).
    Spare,
    /// An explicit pin count, 0-10.
    Pins(PinCount),
}

impl FromStr for RollToken {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::Strike),
            "/" => Ok(Self::Spare),
            other => other
                .parse::<PinCount>()
                .ok()
                .filter(|n| *n <= PIN_TOTAL)
                .map(Self::Pins)
                .ok_or_else(|| RollError::InvalidToken {
                    token: other.to_string(),
                }),
        }
    }
}

impl std::fmt::Display for RollToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strike => write!(f, "X"),
            Self::Spare => write!(f, "/"),
            Self::Pins(n) => write!(f, "{n}"),
        }
    }
}

/// Parses one frame's raw tokens into validated pin counts.
///
/// Tokens are trimmed and empties dropped before anything else, so a UI
/// that pads unused roll slots with `""` can submit them as-is. The
/// remaining tokens are resolved left to right (`X` is 10, `/` is the
/// complement of the previous throw) and then checked against the rules
/// for the frame's position. On any violation the whole submission is
/// rejected; no partial sequence is ever returned.
///
/// # Errors
///
/// See [`RollError`] — one variant per rule, each with a caller-facing
/// message.
#[instrument(skip(tokens), fields(frame = %frame))]
pub fn parse_frame_rolls<S: AsRef<str>>(
    tokens: &[S],
    frame: FrameNumber,
) -> Result<Vec<PinCount>, RollError> {
    let cleaned: Vec<&str> = tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    let max = frame.max_rolls();
    if cleaned.is_empty() || cleaned.len() > max {
        warn!(got = cleaned.len(), max, "Rejected roll count");
        return Err(RollError::WrongRollCount {
            frame,
            max,
            got: cleaned.len(),
        });
    }

    // Resolve notation into pin counts.
    let mut pins: Vec<PinCount> = Vec::with_capacity(cleaned.len());
    for (i, raw) in cleaned.iter().enumerate() {
        let count = match raw.parse::<RollToken>()? {
            RollToken::Strike => PIN_TOTAL,
            RollToken::Spare => {
                if i == 0 {
                    return Err(RollError::SpareOnFirstRoll);
                }
                let prev = pins[i - 1];
                if prev == PIN_TOTAL {
                    return Err(RollError::SpareAfterStrike);
                }
                PIN_TOTAL - prev
            }
            RollToken::Pins(n) => n,
        };
        pins.push(count);
    }

    if frame.is_final() {
        check_final_frame(&pins)?;
    } else {
        check_standard_frame(&pins)?;
    }

    Ok(pins)
}

/// Acceptance rules for frames 1-9: a lone strike, or two rolls whose sum
/// stays within the rack unless the second was exact spare notation.
fn check_standard_frame(pins: &[PinCount]) -> Result<(), RollError> {
    match *pins {
        [PIN_TOTAL] => Ok(()),
        [PIN_TOTAL, _] => Err(RollError::StrikeNotAlone),
        [first, second] if first + second > PIN_TOTAL && second != PIN_TOTAL - first => {
            Err(RollError::PinsExceedFrame { first, second })
        }
        [_, _] => Ok(()),
        _ => Err(RollError::StandardFrameShape),
    }
}

/// Acceptance rules for the tenth frame: two rolls close an open frame,
/// while a strike or true spare in the first two throws earns (and then
/// requires) a third.
fn check_final_frame(pins: &[PinCount]) -> Result<(), RollError> {
    match *pins {
        [first, second] => {
            if first == PIN_TOTAL || (first + second == PIN_TOTAL && second != 0) {
                Err(RollError::BonusRollRequired)
            } else if first + second < PIN_TOTAL {
                Ok(())
            } else {
                Err(RollError::PinsExceedFrame { first, second })
            }
        }
        [first, second, _] => {
            if first == PIN_TOTAL || (first + second == PIN_TOTAL && second != 0) {
                Ok(())
            } else {
                Err(RollError::BonusRollNotEarned)
            }
        }
        _ => Err(RollError::FinalFrameShape),
    }
}
