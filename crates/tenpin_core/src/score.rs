//! Cumulative scoring with bonus-roll lookahead.

use crate::frame::{FRAME_COUNT, Frame, PIN_TOTAL, PinCount};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Scored view of a single frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedFrame {
    /// Resolved pin counts recorded for the frame (empty when unplayed).
    pub rolls: Vec<PinCount>,
    /// Scoreboard glyphs: `"X"`, `"7 /"`, `"4 3"`, or `"-"` when unplayed.
    pub display: String,
    /// Running total through this frame, or `None` while the frame's score
    /// still depends on unplayed bonus rolls.
    pub cumulative_total: Option<u32>,
}

/// Scored view of a player's full game: ten frames plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerScore {
    /// One entry per frame, in order, always ten of them.
    pub frames: Vec<CalculatedFrame>,
    /// Sum of every frame score determined so far.
    pub total: u32,
}

/// Scores a player's game from whatever frames are recorded so far.
///
/// `frames` is indexed by frame (entry 0 is frame 1) and may be shorter
/// than ten entries; missing or `None` entries are unplayed frames. The
/// scoring walk never fails: a strike or spare whose bonus rolls have not
/// been recorded yet keeps its display glyphs but reports an undetermined
/// cumulative total, and later frames keep accumulating past it.
///
/// Bonus rolls are found by position in the flattened cross-frame roll
/// sequence via a prefix-offset table, since a strike frame contributes
/// one roll and open/spare frames contribute two.
#[instrument(skip(frames))]
pub fn calculate_score(frames: &[Option<Frame>]) -> PlayerScore {
    let flat: Vec<PinCount> = frames
        .iter()
        .flatten()
        .flat_map(|f| f.rolls().iter().copied())
        .collect();

    // offsets[i] = index of frame i's first roll within `flat`
    let mut offsets = [0usize; FRAME_COUNT];
    let mut next = 0;
    for (i, offset) in offsets.iter_mut().enumerate() {
        *offset = next;
        next += frame_rolls(frames, i).len();
    }

    let mut scored = Vec::with_capacity(FRAME_COUNT);
    let mut total: u32 = 0;

    for i in 0..FRAME_COUNT {
        let rolls = frame_rolls(frames, i);
        if rolls.is_empty() {
            scored.push(CalculatedFrame {
                rolls: Vec::new(),
                display: "-".to_string(),
                cumulative_total: None,
            });
            continue;
        }

        let last = i == FRAME_COUNT - 1;
        let display = if last {
            render_final_frame(rolls)
        } else {
            render_frame(rolls)
        };

        let frame_score = if last {
            // The tenth frame's own rolls already include its bonuses.
            Some(rolls.iter().copied().map(u32::from).sum())
        } else {
            match *rolls {
                [PIN_TOTAL] => strike_bonus(&flat, offsets[i]),
                [first, second] if u32::from(first) + u32::from(second) == 10 => {
                    spare_bonus(&flat, offsets[i])
                }
                [first, second] => Some(u32::from(first) + u32::from(second)),
                _ => None,
            }
        };

        let cumulative_total = frame_score.map(|score| {
            total += score;
            total
        });

        scored.push(CalculatedFrame {
            rolls: rolls.to_vec(),
            display,
            cumulative_total,
        });
    }

    PlayerScore {
        frames: scored,
        total,
    }
}

/// Rolls recorded for frame index `i`, or an empty slice.
fn frame_rolls(frames: &[Option<Frame>], i: usize) -> &[PinCount] {
    frames
        .get(i)
        .and_then(Option::as_ref)
        .map(|f| f.rolls().as_slice())
        .unwrap_or_default()
}

/// A strike scores 10 plus the next two rolls, wherever they fall.
fn strike_bonus(flat: &[PinCount], offset: usize) -> Option<u32> {
    let first = flat.get(offset + 1)?;
    let second = flat.get(offset + 2)?;
    Some(u32::from(PIN_TOTAL) + u32::from(*first) + u32::from(*second))
}

/// A spare scores 10 plus the first roll of the next frame.
fn spare_bonus(flat: &[PinCount], offset: usize) -> Option<u32> {
    let bonus = flat.get(offset + 2)?;
    Some(u32::from(PIN_TOTAL) + u32::from(*bonus))
}

/// Glyphs for frames 1-9.
fn render_frame(rolls: &[PinCount]) -> String {
    match *rolls {
        [PIN_TOTAL] => "X".to_string(),
        [first, second] if u32::from(first) + u32::from(second) == 10 => format!("{first} /"),
        _ => join_rolls(rolls),
    }
}

/// Glyphs for the tenth frame, rendered throw by throw: a 10 is a strike,
/// a roll completing the previous throw's rack is a spare, anything else
/// is the literal count.
fn render_final_frame(rolls: &[PinCount]) -> String {
    let glyphs: Vec<String> = rolls
        .iter()
        .enumerate()
        .map(|(i, &roll)| {
            if roll == PIN_TOTAL {
                "X".to_string()
            } else if i > 0 && PIN_TOTAL.checked_sub(rolls[i - 1]) == Some(roll) {
                "/".to_string()
            } else {
                roll.to_string()
            }
        })
        .collect();
    glyphs.join(" ")
}

fn join_rolls(rolls: &[PinCount]) -> String {
    rolls
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
