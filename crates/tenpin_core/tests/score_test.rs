//! Tests for the bonus-lookahead score calculator.

use tenpin_core::{CalculatedFrame, Frame, FrameNumber, calculate_score, parse_frame_rolls};

fn played(rolls: &[u8]) -> Option<Frame> {
    Some(Frame::new(rolls.to_vec()))
}

/// Ten frames of recorded rolls, shorthand for full-game tests.
fn game(frames: &[&[u8]]) -> Vec<Option<Frame>> {
    frames.iter().map(|rolls| played(rolls)).collect()
}

#[test]
fn test_perfect_game() {
    let frames = game(&[
        &[10],
        &[10],
        &[10],
        &[10],
        &[10],
        &[10],
        &[10],
        &[10],
        &[10],
        &[10, 10, 10],
    ]);
    let score = calculate_score(&frames);

    assert_eq!(score.total, 300);
    for (i, frame) in score.frames.iter().enumerate() {
        assert_eq!(
            frame.cumulative_total,
            Some(30 * (i as u32 + 1)),
            "frame {}",
            i + 1
        );
    }
    assert_eq!(score.frames[9].display, "X X X");
}

#[test]
fn test_all_gutter_game() {
    let frames = game(&[
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
    ]);
    let score = calculate_score(&frames);

    assert_eq!(score.total, 0);
    for frame in &score.frames {
        assert_eq!(frame.display, "0 0");
        assert!(frame.cumulative_total.is_some());
    }
}

#[test]
fn test_empty_game() {
    let score = calculate_score(&[]);
    assert_eq!(score.total, 0);
    assert_eq!(score.frames.len(), 10);
    for frame in &score.frames {
        assert_eq!(
            *frame,
            CalculatedFrame {
                rolls: Vec::new(),
                display: "-".to_string(),
                cumulative_total: None,
            }
        );
    }
}

#[test]
fn test_strike_waits_for_both_bonus_rolls() {
    // Frame 1 strike, nothing else played yet.
    let score = calculate_score(&[played(&[10])]);
    assert_eq!(score.frames[0].display, "X");
    assert_eq!(score.frames[0].cumulative_total, None);
    assert_eq!(score.total, 0);

    // A following strike supplies only one of the two bonus rolls.
    let score = calculate_score(&[played(&[10]), played(&[10])]);
    assert_eq!(score.frames[0].cumulative_total, None);

    // Two bonus rolls resolve the strike.
    let score = calculate_score(&[played(&[10]), played(&[3, 4])]);
    assert_eq!(score.frames[0].cumulative_total, Some(17));
    assert_eq!(score.frames[1].cumulative_total, Some(24));
    assert_eq!(score.total, 24);
}

#[test]
fn test_spare_waits_for_one_bonus_roll() {
    let score = calculate_score(&[played(&[7, 3])]);
    assert_eq!(score.frames[0].display, "7 /");
    assert_eq!(score.frames[0].cumulative_total, None);
    assert_eq!(score.total, 0);
}

#[test]
fn test_spare_then_open() {
    let score = calculate_score(&[played(&[7, 3]), played(&[3, 4])]);
    assert_eq!(score.frames[0].cumulative_total, Some(13));
    assert_eq!(score.frames[1].cumulative_total, Some(20));
    assert_eq!(score.total, 20);
}

#[test]
fn test_gap_frame_does_not_block_later_totals() {
    // Frame 1 played, frame 2 skipped, frame 3 played.
    let frames = vec![played(&[3, 4]), None, played(&[2, 5])];
    let score = calculate_score(&frames);

    assert_eq!(score.frames[0].cumulative_total, Some(7));
    assert_eq!(score.frames[1].display, "-");
    assert_eq!(score.frames[1].cumulative_total, None);
    // Frame 3 is open, so it resolves and keeps accumulating.
    assert_eq!(score.frames[2].cumulative_total, Some(14));
    assert_eq!(score.total, 14);
}

#[test]
fn test_consecutive_strikes_chain_bonuses() {
    // Turkey then an open frame: 10+10+10, 10+10+4, 10+4+2, 6.
    let frames = game(&[&[10], &[10], &[10], &[4, 2]]);
    let score = calculate_score(&frames);

    assert_eq!(score.frames[0].cumulative_total, Some(30));
    assert_eq!(score.frames[1].cumulative_total, Some(54));
    assert_eq!(score.frames[2].cumulative_total, Some(70));
    assert_eq!(score.frames[3].cumulative_total, Some(76));
    assert_eq!(score.total, 76);
}

#[test]
fn test_ninth_frame_strike_resolved_by_tenth() {
    let mut frames = vec![None; 8];
    frames.push(played(&[10]));
    frames.push(played(&[3, 5]));
    let score = calculate_score(&frames);

    assert_eq!(score.frames[8].cumulative_total, Some(18));
    assert_eq!(score.frames[9].cumulative_total, Some(26));
    assert_eq!(score.total, 26);
}

#[test]
fn test_tenth_frame_scores_its_own_rolls() {
    let mut frames = vec![None; 9];
    frames.push(played(&[10, 5, 5]));
    let score = calculate_score(&frames);

    assert_eq!(score.frames[9].display, "X 5 /");
    assert_eq!(score.frames[9].cumulative_total, Some(20));
    assert_eq!(score.total, 20);
}

#[test]
fn test_idempotent() {
    let frames = game(&[&[10], &[7, 3], &[4, 4]]);
    let first = calculate_score(&frames);
    let second = calculate_score(&frames);
    assert_eq!(first, second);
}

#[test]
fn test_display_round_trips_accepted_notation() {
    // Parsing accepted notation and re-rendering it reproduces the
    // original strike/spare glyphs.
    let cases: &[(&[&str], u8, &str)] = &[
        (&["X"], 1, "X"),
        (&["7", "/"], 2, "7 /"),
        (&["4", "3"], 3, "4 3"),
        (&["0", "0"], 4, "0 0"),
        (&["X", "X", "X"], 10, "X X X"),
        (&["X", "5", "/"], 10, "X 5 /"),
        (&["9", "0"], 10, "9 0"),
        (&["7", "/", "X"], 10, "7 / X"),
    ];

    for &(tokens, frame_number, expected) in cases {
        let frame = FrameNumber::new(frame_number).unwrap();
        let pins = parse_frame_rolls(tokens, frame).unwrap();

        let mut frames = vec![None; frame.index()];
        frames.push(Some(Frame::new(pins)));
        let score = calculate_score(&frames);

        assert_eq!(
            score.frames[frame.index()].display, expected,
            "tokens {tokens:?}"
        );
    }
}

#[test]
fn test_typical_full_game() {
    // A realistic scorecard exercising every frame kind.
    let frames = game(&[
        &[1, 4],    //  5
        &[4, 5],    // 14
        &[6, 4],    // spare + 5 -> 29
        &[5, 5],    // spare + 10 -> 49
        &[10],      // strike + 0 + 1 -> 60
        &[0, 1],    // 61
        &[7, 3],    // spare + 6 -> 77
        &[6, 4],    // spare + 10 -> 97
        &[10],      // strike + 2 + 8 -> 117
        &[2, 8, 6], // 16 -> 133
    ]);
    let score = calculate_score(&frames);

    let expected = [5, 14, 29, 49, 60, 61, 77, 97, 117, 133];
    for (i, want) in expected.into_iter().enumerate() {
        assert_eq!(
            score.frames[i].cumulative_total,
            Some(want),
            "frame {}",
            i + 1
        );
    }
    assert_eq!(score.total, 133);
    assert_eq!(score.frames[9].display, "2 / 6");
}
