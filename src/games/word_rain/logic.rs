//! Game logic for Word Rain.
//!
//! Free functions that advance a [`WordRainGame`]: frame ticks move the
//! words, taps resolve answers, and a 1 Hz timer counts the session down.
//! Each returns the events the presentation layer should react to; the
//! logic itself never touches UI concerns.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::generation::{build_round_set, pick_target};
use super::types::{TapState, WordRainGame};
use crate::constants::{CORRECT_TAP_BASE_SCORE, MAX_FRAME_SECS};
use crate::session::SessionPhase;
use crate::summary::GameSummary;

/// Events reported to the presentation layer.
///
/// `AnnounceWord` is a request to speak the word aloud; playback is the
/// driver's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WordRainEvent {
    RoundSpawned { target_word: String },
    AnnounceWord { word: String },
    CorrectTap { word: String, score_gained: u32 },
    WrongTap { word: String },
    TargetMissed { word: String },
    SessionEnded { summary: GameSummary },
}

/// Begin the session and spawn the first round.
pub fn start(game: &mut WordRainGame, rng: &mut impl Rng) -> Vec<WordRainEvent> {
    let mut events = Vec::new();
    if game.phase != SessionPhase::NotStarted {
        return events;
    }
    game.phase = SessionPhase::Running;
    spawn_round(game, rng, &mut events);
    events
}

/// Advance one frame: move untapped words down, respawn after the
/// inter-round delay, and close out a fully resolved round.
pub fn advance_tick(
    game: &mut WordRainGame,
    dt_secs: f64,
    rng: &mut impl Rng,
) -> Vec<WordRainEvent> {
    let mut events = Vec::new();
    if !game.phase.is_running() || !dt_secs.is_finite() || dt_secs <= 0.0 {
        return events;
    }
    let dt = dt_secs.min(MAX_FRAME_SECS);

    if let Some(timer) = game.respawn_timer_secs {
        let remaining = timer - dt;
        if remaining <= 0.0 {
            spawn_round(game, rng, &mut events);
        } else {
            game.respawn_timer_secs = Some(remaining);
        }
        return events;
    }

    if game.words.is_empty() {
        return events;
    }

    let speed = game.level.fall_speed();
    for word in &mut game.words {
        if !word.is_tapped() {
            word.y += speed * dt;
        }
    }

    check_round_complete(game, &mut events);
    events
}

/// Resolve a tap on the word with the given id.
///
/// Unknown ids, already-resolved words, and taps outside `Running` are
/// silent no-ops. A correct tap scores and ends the round immediately; a
/// wrong tap only counts against accuracy and the round continues.
pub fn on_tap(game: &mut WordRainGame, word_id: u32) -> Vec<WordRainEvent> {
    let mut events = Vec::new();
    if !game.phase.is_running() {
        return events;
    }
    let Some(idx) = game.words.iter().position(|w| w.id == word_id) else {
        return events;
    };
    if game.words[idx].is_resolved() {
        return events;
    }

    let word_text = game.words[idx].word.clone();
    if game.words[idx].is_target {
        game.words[idx].tap_state = TapState::Correct;
        let gained = CORRECT_TAP_BASE_SCORE * game.level.score_multiplier();
        game.score += gained;
        game.correct_count += 1;
        game.total_count += 1;
        events.push(WordRainEvent::CorrectTap {
            word: word_text,
            score_gained: gained,
        });
        end_round(game);
    } else {
        game.words[idx].tap_state = TapState::Wrong;
        game.total_count += 1;
        events.push(WordRainEvent::WrongTap { word: word_text });
        // The wrong tap may have resolved the last outstanding word.
        check_round_complete(game, &mut events);
    }
    events
}

/// One second of session time. Ends the session when the clock reaches
/// zero, delivering the summary exactly once.
pub fn tick_second(game: &mut WordRainGame) -> Vec<WordRainEvent> {
    let mut events = Vec::new();
    if !game.phase.is_running() {
        return events;
    }
    game.time_remaining_secs = game.time_remaining_secs.saturating_sub(1);
    if game.time_remaining_secs == 0 {
        game.phase = SessionPhase::Ended;
        events.push(WordRainEvent::SessionEnded {
            summary: game.summary(),
        });
    }
    events
}

pub fn pause(game: &mut WordRainGame) {
    game.phase = game.phase.paused();
}

pub fn resume(game: &mut WordRainGame) {
    game.phase = game.phase.resumed();
}

/// Re-request the audio cue for the current target (the speaker button).
pub fn request_announcement(game: &WordRainGame) -> Vec<WordRainEvent> {
    if game.phase.is_running() {
        if let Some(word) = &game.target_word {
            return vec![WordRainEvent::AnnounceWord { word: word.clone() }];
        }
    }
    Vec::new()
}

fn spawn_round(game: &mut WordRainGame, rng: &mut impl Rng, events: &mut Vec<WordRainEvent>) {
    game.respawn_timer_secs = None;
    let target = match pick_target(&game.vocabulary, rng) {
        Some(word) => word,
        // Empty vocabulary: no rounds, but the session clock still runs.
        None => return,
    };
    let set = build_round_set(
        &game.vocabulary,
        game.level.words_per_round(),
        &target,
        game.next_word_id,
        rng,
    );
    game.next_word_id += set.len() as u32;
    game.words = set;
    game.target_word = Some(target.clone());
    events.push(WordRainEvent::RoundSpawned {
        target_word: target.clone(),
    });
    events.push(WordRainEvent::AnnounceWord { word: target });
}

/// Close the round once every word is tapped or fallen. A target that
/// fell untapped counts as exactly one miss, however many distractors
/// fell beside it.
fn check_round_complete(game: &mut WordRainGame, events: &mut Vec<WordRainEvent>) {
    if game.words.is_empty() || !game.words.iter().all(|w| w.is_resolved()) {
        return;
    }
    let missed_target = game
        .words
        .iter()
        .find(|w| w.is_target && !w.is_tapped())
        .map(|w| w.word.clone());
    if let Some(word) = missed_target {
        game.total_count += 1;
        events.push(WordRainEvent::TargetMissed { word });
    }
    end_round(game);
}

fn end_round(game: &mut WordRainGame) {
    game.words.clear();
    game.target_word = None;
    game.respawn_timer_secs = Some(game.respawn_delay_secs.max(0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_rain::types::starter_vocabulary;
    use crate::level::Level;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn started_game(level: Level, rng: &mut ChaCha8Rng) -> WordRainGame {
        let mut game = WordRainGame::new(level, starter_vocabulary(), 60);
        game.respawn_delay_secs = 0.0;
        start(&mut game, rng);
        game
    }

    fn target_id(game: &WordRainGame) -> u32 {
        game.words
            .iter()
            .find(|w| w.is_target)
            .map(|w| w.id)
            .expect("round should contain a target")
    }

    fn distractor_id(game: &WordRainGame) -> u32 {
        game.words
            .iter()
            .find(|w| !w.is_target)
            .map(|w| w.id)
            .expect("round should contain a distractor")
    }

    #[test]
    fn test_start_spawns_round_and_announces() {
        let mut rng = create_test_rng();
        let mut game = WordRainGame::new(Level::Easy, starter_vocabulary(), 60);
        let events = start(&mut game, &mut rng);

        assert_eq!(game.phase, SessionPhase::Running);
        assert_eq!(game.words.len(), Level::Easy.words_per_round());
        assert!(matches!(events[0], WordRainEvent::RoundSpawned { .. }));
        assert!(matches!(events[1], WordRainEvent::AnnounceWord { .. }));
        let target = game.target_word.as_deref().expect("target set");
        assert!(game.words.iter().any(|w| w.is_target && w.word == target));
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let round_ids: Vec<u32> = game.words.iter().map(|w| w.id).collect();
        let events = start(&mut game, &mut rng);
        assert!(events.is_empty(), "second start should do nothing");
        let after: Vec<u32> = game.words.iter().map(|w| w.id).collect();
        assert_eq!(round_ids, after);
    }

    #[test]
    fn test_tick_moves_untapped_words_down() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let before: Vec<f64> = game.words.iter().map(|w| w.y).collect();

        advance_tick(&mut game, 0.05, &mut rng);

        let expected_drop = Level::Easy.fall_speed() * 0.05;
        for (word, y0) in game.words.iter().zip(before) {
            assert!(
                (word.y - y0 - expected_drop).abs() < 1e-12,
                "word {} moved {} expected {}",
                word.word,
                word.y - y0,
                expected_drop
            );
        }
    }

    #[test]
    fn test_tick_clamps_runaway_delta() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let y0 = game.words[0].y;

        advance_tick(&mut game, 5.0, &mut rng);

        let max_drop = Level::Easy.fall_speed() * MAX_FRAME_SECS;
        assert!(
            game.words[0].y - y0 <= max_drop + 1e-12,
            "a stalled frame should not teleport words"
        );
    }

    #[test]
    fn test_correct_tap_scores_and_ends_round() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Medium, &mut rng);
        let id = target_id(&game);

        let events = on_tap(&mut game, id);

        assert_eq!(game.score, 20, "medium level scores 10 x 2");
        assert_eq!(game.correct_count, 1);
        assert_eq!(game.total_count, 1);
        assert!(game.words.is_empty(), "round clears on a correct tap");
        assert!(game.respawn_timer_secs.is_some());
        assert!(
            matches!(&events[0], WordRainEvent::CorrectTap { score_gained, .. } if *score_gained == 20)
        );
    }

    #[test]
    fn test_wrong_tap_counts_and_round_continues() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let id = distractor_id(&game);

        let events = on_tap(&mut game, id);

        assert_eq!(game.score, 0);
        assert_eq!(game.correct_count, 0);
        assert_eq!(game.total_count, 1);
        assert!(game.is_round_active(), "round survives a wrong tap");
        assert!(matches!(events[0], WordRainEvent::WrongTap { .. }));
    }

    #[test]
    fn test_double_tap_is_noop() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let id = distractor_id(&game);

        on_tap(&mut game, id);
        let events = on_tap(&mut game, id);

        assert!(events.is_empty());
        assert_eq!(game.total_count, 1, "second tap must not count again");
    }

    #[test]
    fn test_unknown_id_tap_is_noop() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let events = on_tap(&mut game, 9999);
        assert!(events.is_empty());
        assert_eq!(game.total_count, 0);
    }

    #[test]
    fn test_tap_while_paused_is_noop() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let id = target_id(&game);

        pause(&mut game);
        let events = on_tap(&mut game, id);
        assert!(events.is_empty());
        assert_eq!(game.score, 0);

        resume(&mut game);
        on_tap(&mut game, id);
        assert_eq!(game.score, 10, "tap works again after resume");
    }

    #[test]
    fn test_missed_target_recorded_once() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        // Keep the respawn pending so the miss bookkeeping is observable.
        game.respawn_delay_secs = 10.0;

        // Let every word fall past the bottom edge.
        for _ in 0..2000 {
            if !game.is_round_active() {
                break;
            }
            advance_tick(&mut game, 0.05, &mut rng);
        }

        assert!(!game.is_round_active(), "round should have resolved");
        assert_eq!(game.total_count, 1, "one miss for the whole round");
        assert_eq!(game.correct_count, 0);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_miss_event_emitted_for_fallen_target() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        game.respawn_delay_secs = 10.0;
        let target = game.target_word.clone().expect("target set");

        let mut saw_miss = false;
        for _ in 0..2000 {
            for event in advance_tick(&mut game, 0.05, &mut rng) {
                if let WordRainEvent::TargetMissed { word } = event {
                    assert_eq!(word, target);
                    saw_miss = true;
                }
            }
            if !game.is_round_active() {
                break;
            }
        }
        assert!(saw_miss, "falling target should emit a miss event");
    }

    #[test]
    fn test_wrong_tap_can_finish_round() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        game.respawn_delay_secs = 10.0;

        // Resolve everything except one distractor by letting words fall,
        // then tap the survivor. Simplest setup: tap every distractor.
        let distractors: Vec<u32> = game
            .words
            .iter()
            .filter(|w| !w.is_target)
            .map(|w| w.id)
            .collect();
        for id in &distractors[..distractors.len() - 1] {
            on_tap(&mut game, *id);
        }

        // Drop the target off the bottom; the round stays open because one
        // distractor is still falling.
        let last = distractors[distractors.len() - 1];
        for _ in 0..2000 {
            let target_gone = game
                .words
                .iter()
                .find(|w| w.is_target)
                .map(|w| w.is_resolved())
                .unwrap_or(true);
            if target_gone {
                break;
            }
            // Freeze the remaining distractor so only the target falls.
            if let Some(word) = game.words.iter_mut().find(|w| w.id == last) {
                word.y = 0.5;
            }
            advance_tick(&mut game, 0.05, &mut rng);
        }
        assert!(game.is_round_active(), "one distractor still unresolved");

        let before_total = game.total_count;
        on_tap(&mut game, last);
        assert!(!game.is_round_active(), "tapping the last word ends the round");
        // The wrong tap and the fallen target each count once.
        assert_eq!(game.total_count, before_total + 2);
    }

    #[test]
    fn test_respawn_after_delay() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        game.respawn_delay_secs = 0.15;
        let id = target_id(&game);
        on_tap(&mut game, id);
        assert!(!game.is_round_active());

        // First tick eats part of the delay, second crosses it.
        let events = advance_tick(&mut game, 0.1, &mut rng);
        assert!(events.is_empty(), "still waiting to respawn");
        let events = advance_tick(&mut game, 0.1, &mut rng);
        assert!(
            matches!(events.first(), Some(WordRainEvent::RoundSpawned { .. })),
            "respawn should produce a new round"
        );
        assert!(game.is_round_active());
    }

    #[test]
    fn test_word_ids_unique_across_rounds() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let first_round: Vec<u32> = game.words.iter().map(|w| w.id).collect();
        let id = target_id(&game);
        on_tap(&mut game, id);
        advance_tick(&mut game, 0.05, &mut rng);

        assert!(game.is_round_active(), "zero delay respawns next tick");
        for word in &game.words {
            assert!(
                !first_round.contains(&word.id),
                "id {} reused across rounds",
                word.id
            );
        }
    }

    #[test]
    fn test_timer_ends_session_with_summary() {
        let mut rng = create_test_rng();
        let mut game = WordRainGame::new(Level::Easy, starter_vocabulary(), 2);
        start(&mut game, &mut rng);

        assert!(tick_second(&mut game).is_empty());
        let events = tick_second(&mut game);

        assert_eq!(game.phase, SessionPhase::Ended);
        match &events[0] {
            WordRainEvent::SessionEnded { summary } => {
                assert_eq!(summary.duration_secs, 2);
            }
            other => panic!("expected SessionEnded, got {:?}", other),
        }

        // The session is over; nothing else fires.
        assert!(tick_second(&mut game).is_empty());
        assert!(advance_tick(&mut game, 0.05, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_duration_ends_on_first_second() {
        let mut rng = create_test_rng();
        let mut game = WordRainGame::new(Level::Easy, starter_vocabulary(), 0);
        start(&mut game, &mut rng);
        let events = tick_second(&mut game);
        assert_eq!(game.phase, SessionPhase::Ended);
        assert!(matches!(events[0], WordRainEvent::SessionEnded { .. }));
    }

    #[test]
    fn test_empty_vocabulary_degrades_quietly() {
        let mut rng = create_test_rng();
        let mut game = WordRainGame::new(Level::Easy, Vec::new(), 3);
        let events = start(&mut game, &mut rng);

        assert!(events.is_empty(), "nothing to spawn or announce");
        assert!(!game.is_round_active());
        advance_tick(&mut game, 0.05, &mut rng);
        tick_second(&mut game);
        assert_eq!(game.phase, SessionPhase::Running, "clock still runs");
    }

    #[test]
    fn test_paused_clock_and_words_hold_still() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        pause(&mut game);

        let ys: Vec<f64> = game.words.iter().map(|w| w.y).collect();
        advance_tick(&mut game, 0.05, &mut rng);
        assert!(tick_second(&mut game).is_empty());

        let after: Vec<f64> = game.words.iter().map(|w| w.y).collect();
        assert_eq!(ys, after, "paused words must not move");
        assert_eq!(game.time_remaining_secs, 60);
    }

    #[test]
    fn test_announcement_replay() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        let target = game.target_word.clone().expect("target set");

        let events = request_announcement(&game);
        assert!(
            matches!(&events[0], WordRainEvent::AnnounceWord { word } if *word == target)
        );

        pause(&mut game);
        assert!(request_announcement(&game).is_empty());
    }

    #[test]
    fn test_accuracy_tracks_counts() {
        let mut rng = create_test_rng();
        let mut game = started_game(Level::Easy, &mut rng);
        assert_eq!(game.accuracy(), 0.0);

        let id = distractor_id(&game);
        on_tap(&mut game, id);
        let id = target_id(&game);
        on_tap(&mut game, id);

        assert_eq!(game.correct_count, 1);
        assert_eq!(game.total_count, 2);
        assert!((game.accuracy() - 50.0).abs() < 1e-9);
    }
}
