use crate::domain::frames::FrameState;
use crate::domain::parsing::parse_notation;
use crate::domain::scoring::{score_append, Lookback};

/// Replay a sequence of notations through the engine the way the
/// orchestrator would: window from the accumulated history, fixups
/// applied back onto it.
fn play(notations: &[&str]) -> Vec<FrameState> {
    let mut history: Vec<FrameState> = Vec::new();
    for (i, raw) in notations.iter().enumerate() {
        let frame_no = (i + 1) as i16;
        let attempts = parse_notation(raw, frame_no).expect("valid notation");
        let at = |no: i16| history.iter().find(|f| f.frame_no == no).cloned();
        let window = Lookback {
            prev: at(frame_no - 1),
            prev2: at(frame_no - 2),
            prev3: at(frame_no - 3),
        };
        let outcome = score_append(frame_no, attempts, &window);
        for fixup in &outcome.resolved {
            let frame = history
                .iter_mut()
                .find(|f| f.frame_no == fixup.frame_no)
                .expect("fixup targets a recorded frame");
            assert!(
                !frame.is_resolved(),
                "frame {} was already resolved",
                fixup.frame_no
            );
            frame.frame_score = Some(fixup.frame_score);
            frame.running_total = Some(fixup.running_total);
        }
        history.push(outcome.appended);
    }
    history
}

fn running_totals(history: &[FrameState]) -> Vec<Option<i16>> {
    history.iter().map(|f| f.running_total).collect()
}

#[test]
fn open_frames_resolve_immediately() {
    let history = play(&["2-3", "4-4"]);
    assert_eq!(history[0].frame_score, Some(5));
    assert_eq!(history[0].running_total, Some(5));
    assert_eq!(history[1].frame_score, Some(8));
    assert_eq!(history[1].running_total, Some(13));
}

#[test]
fn strike_stays_pending_until_both_bonus_balls_are_known() {
    let history = play(&["X"]);
    assert_eq!(history[0].frame_score, None);
    assert_eq!(history[0].running_total, None);

    let history = play(&["X", "7-2"]);
    assert_eq!(history[0].frame_score, Some(19));
    assert_eq!(history[0].running_total, Some(19));
    assert_eq!(history[1].running_total, Some(28));
}

#[test]
fn spare_resolves_off_the_next_first_ball() {
    let history = play(&["7/"]);
    assert_eq!(history[0].frame_score, None);

    let history = play(&["7/", "4-2"]);
    assert_eq!(history[0].frame_score, Some(14));
    assert_eq!(history[0].running_total, Some(14));
    assert_eq!(history[1].running_total, Some(20));
}

#[test]
fn double_strike_defers_one_more_frame() {
    // the first strike's second bonus ball arrives with frame 3
    let history = play(&["X", "X"]);
    assert_eq!(running_totals(&history), vec![None, None]);

    let history = play(&["X", "X", "3-4"]);
    assert_eq!(history[0].frame_score, Some(23)); // 10 + 10 + 3
    assert_eq!(history[1].frame_score, Some(17)); // 10 + 3 + 4
    assert_eq!(running_totals(&history), vec![Some(23), Some(40), Some(47)]);
}

#[test]
fn turkey_resolves_the_oldest_strike_only() {
    let history = play(&["X", "X", "X"]);
    assert_eq!(running_totals(&history), vec![Some(30), None, None]);
}

#[test]
fn spare_after_strike_resolves_the_strike_fully() {
    // the spare's two balls are both bonus balls for the strike
    let history = play(&["X", "7/"]);
    assert_eq!(history[0].frame_score, Some(20));
    assert_eq!(history[0].running_total, Some(20));
    assert_eq!(history[1].frame_score, None);
}

#[test]
fn retroactive_resolution_literal_scenario() {
    let history = play(&[
        "X", "7/", "7-2", "9/", "X", "X", "X", "2-3", "6/", "7/3",
    ]);
    // frame 9 is 6/ = 10 + the next first ball (7) = 17, so 138 + 17 = 155
    assert_eq!(
        running_totals(&history),
        vec![
            Some(20),
            Some(37),
            Some(46),
            Some(66),
            Some(96),
            Some(118),
            Some(133),
            Some(138),
            Some(155),
            Some(168),
        ]
    );
}

#[test]
fn perfect_game_scores_three_hundred() {
    let history = play(&["X", "X", "X", "X", "X", "X", "X", "X", "X", "X-X-X"]);
    let expected: Vec<Option<i16>> = (1..=10).map(|n| Some(30 * n)).collect();
    assert_eq!(running_totals(&history), expected);
    for frame in &history {
        assert_eq!(frame.frame_score, Some(30));
    }
}

#[test]
fn all_spares_score_one_hundred_fifty() {
    let history = play(&[
        "5/", "5/", "5/", "5/", "5/", "5/", "5/", "5/", "5/", "5/5",
    ]);
    assert_eq!(history[9].running_total, Some(150));
}

#[test]
fn gutter_game_scores_zero() {
    let history = play(&["0-0"; 10]);
    assert_eq!(history[9].running_total, Some(0));
    for frame in &history {
        assert_eq!(frame.frame_score, Some(0));
    }
}

#[test]
fn tenth_frame_resolves_immediately_and_supplies_missing_bonuses() {
    // strike in frame 9 resolved by frame 10's two real balls
    let mut notations = vec!["0-0"; 8];
    notations.push("X");
    notations.push("2-3");
    let history = play(&notations);
    assert_eq!(history[8].frame_score, Some(15)); // 10 + 2 + 3
    assert_eq!(history[8].running_total, Some(15));
    assert_eq!(history[9].frame_score, Some(5));
    assert_eq!(history[9].running_total, Some(20));
}

#[test]
fn tenth_frame_strike_forms_resolve_two_pending_strikes() {
    // frames 8 and 9 strikes, frame 10 opens with a strike: the append
    // resolves both in the same step
    let mut notations = vec!["0-0"; 7];
    notations.extend(["X", "X", "X-4-5"]);
    let history = play(&notations);
    assert_eq!(history[7].frame_score, Some(30)); // 10 + 10 + 10
    assert_eq!(history[8].frame_score, Some(24)); // 10 + 10 + 4
    assert_eq!(history[9].frame_score, Some(19)); // 10 + 4 + 5
    assert_eq!(history[9].running_total, Some(73));
}

#[test]
fn tenth_frame_spare_with_bonus_strike() {
    let mut notations = vec!["0-0"; 9];
    notations.push("7/X");
    let history = play(&notations);
    assert_eq!(history[9].frame_score, Some(20));
    assert_eq!(history[9].running_total, Some(20));
}

#[test]
fn resolved_frames_are_never_revised() {
    // every fixup in `play` asserts the target was still pending; a long
    // mixed sequence exercises all retroactive paths
    let history = play(&[
        "X", "X", "7/", "9-0", "X", "7/", "X", "X", "X", "X-X-X",
    ]);
    assert_eq!(history[9].running_total, Some(235));
}
