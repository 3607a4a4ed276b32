//! Word solving command
//!
//! Plays a full game against a simulated user who knows the target word and
//! answers every question truthfully.

use crate::core::{PartialWord, Positions, Word};
use crate::solver::{
    Adapter, AdapterError, Game, GameConfig, GameError, Outcome, Presence, Strategy,
};
use crate::wordlists::words_of_length;
use std::io;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub steps: Vec<GuessStep>,
    pub wrong_guesses: usize,
    pub max_wrong: usize,
    pub initial_candidates: usize,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_win()
    }
}

/// A single letter guess in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: u8,
    pub hit: bool,
    pub positions: Positions,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Partial word after the answer
    pub partial: String,
}

/// Simulated user who knows the secret word
struct KnownWordAdapter<'a> {
    target: &'a Word,
    remaining: usize,
    partial: String,
    steps: Vec<GuessStep>,
}

impl<'a> KnownWordAdapter<'a> {
    fn new(target: &'a Word, remaining: usize) -> Self {
        Self {
            target,
            remaining,
            partial: PartialWord::new(target.len()).render(),
            steps: Vec::new(),
        }
    }

    fn current(&mut self) -> Option<&mut GuessStep> {
        self.steps.last_mut()
    }
}

impl Adapter for KnownWordAdapter<'_> {
    fn ask_length(&mut self) -> Result<usize, AdapterError> {
        Ok(self.target.len())
    }

    fn ask_letter_confirmation(&mut self, letter: u8) -> Result<Presence, AdapterError> {
        let hit = self.target.has_letter(letter);
        if let Some(step) = self.current() {
            step.hit = hit;
        }
        Ok(if hit {
            Presence::Present
        } else {
            Presence::Absent
        })
    }

    fn ask_positions(&mut self, letter: u8, length: usize) -> Result<Positions, AdapterError> {
        let positions = Positions::new(self.target.positions_of(letter), length)
            .map_err(|e| AdapterError::Io(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
        if let Some(step) = self.current() {
            step.positions = positions.clone();
        }
        Ok(positions)
    }

    fn ask_final_word_confirmation(&mut self, word: &Word) -> Result<bool, AdapterError> {
        Ok(word == self.target)
    }

    fn announce_guess(&mut self, letter: u8) -> Result<(), AdapterError> {
        self.steps.push(GuessStep {
            letter,
            hit: false,
            positions: Positions::default(),
            candidates_before: self.remaining,
            candidates_after: self.remaining,
            partial: self.partial.clone(),
        });
        Ok(())
    }

    fn announce_wrong_count(
        &mut self,
        _wrong: usize,
        _max_wrong: usize,
    ) -> Result<(), AdapterError> {
        Ok(())
    }

    fn announce_remaining(&mut self, remaining: usize) -> Result<(), AdapterError> {
        self.remaining = remaining;
        if let Some(step) = self.current() {
            step.candidates_after = remaining;
        }
        Ok(())
    }

    fn announce_partial(&mut self, partial: &PartialWord) -> Result<(), AdapterError> {
        self.partial = partial.render();
        let rendered = self.partial.clone();
        if let Some(step) = self.current() {
            step.partial = rendered;
        }
        Ok(())
    }
}

/// Self-play against an already validated target
///
/// `words` may contain words of any length; only those matching the
/// target are used.
///
/// # Errors
///
/// Returns `GameError` only if the engine's own invariants are broken.
pub fn solve_target<S: Strategy>(
    target: &Word,
    words: &[Word],
    strategy: S,
    config: GameConfig,
) -> Result<SolveResult, GameError> {
    let candidates = words_of_length(words, target.len());
    let initial_candidates = candidates.len();

    let mut game = Game::new(strategy, candidates, target.len(), config);
    let mut adapter = KnownWordAdapter::new(target, initial_candidates);
    let outcome = game.play(&mut adapter)?;

    Ok(SolveResult {
        target: target.text().to_string(),
        outcome,
        steps: adapter.steps,
        wrong_guesses: game.wrong_guesses(),
        max_wrong: config.max_wrong,
        initial_candidates,
    })
}

/// Solve a specific word using the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not a-z)
/// - The engine reports a broken invariant
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    words: &[Word],
    strategy: S,
) -> Result<SolveResult, String> {
    let target =
        Word::new(config.target.as_str()).map_err(|e| format!("Invalid target word: {e}"))?;
    solve_target(&target, words, strategy, config.game).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, LossReason, MAX_WRONG, PositionMode};
    use crate::wordlists::words_from_lines;

    fn dictionary() -> Vec<Word> {
        words_from_lines(
            [
                "cat", "dog", "bat", "rat", "hat", "mat", "cot", "cut", "horse", "house",
                "mouse", "moose",
            ],
            None,
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let config = SolveConfig::new("cat".to_string());
        let result = solve_word(&config, &dictionary(), FrequencyStrategy).unwrap();

        assert!(result.success());
        assert_eq!(result.outcome, Outcome::Win(Word::new("cat").unwrap()));
        assert_eq!(result.initial_candidates, 8);
        assert!(result.wrong_guesses <= MAX_WRONG);
    }

    #[test]
    fn solve_records_history() {
        let config = SolveConfig::new("mouse".to_string());
        let result = solve_word(&config, &dictionary(), FrequencyStrategy).unwrap();

        assert!(result.success());
        assert!(!result.steps.is_empty());
        assert_eq!(result.steps[0].candidates_before, 4);

        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert_eq!(step.hit, !step.positions.is_empty());
        }
        let misses = result.steps.iter().filter(|s| !s.hit).count();
        assert_eq!(misses, result.wrong_guesses);
    }

    #[test]
    fn solve_partial_tracks_revealed_letters() {
        let config = SolveConfig::new("cut".to_string());
        let result = solve_word(&config, &dictionary(), FrequencyStrategy).unwrap();

        for step in &result.steps {
            assert_eq!(step.partial.len(), 3);
            for (i, ch) in step.partial.bytes().enumerate() {
                if ch != b'_' {
                    assert_eq!(ch, b"cut"[i]);
                }
            }
        }
    }

    #[test]
    fn solve_unknown_word_is_a_loss() {
        let config = SolveConfig::new("cup".to_string());
        let result = solve_word(&config, &dictionary(), FrequencyStrategy).unwrap();

        assert!(!result.success());
        assert!(matches!(result.outcome, Outcome::Loss(_)));
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let config = SolveConfig::new("c4t".to_string());
        let result = solve_word(&config, &dictionary(), FrequencyStrategy);
        assert!(result.is_err());
    }

    #[test]
    fn solve_without_words_loses_immediately() {
        let config = SolveConfig::new("zebras".to_string());
        let result = solve_word(&config, &dictionary(), FrequencyStrategy).unwrap();

        assert_eq!(result.outcome, Outcome::Loss(LossReason::NoCandidates));
        assert!(result.steps.is_empty());
    }

    #[test]
    fn solve_with_exact_positions() {
        let mut config = SolveConfig::new("moose".to_string());
        config.game = GameConfig::new(MAX_WRONG, PositionMode::Exact);

        let result = solve_word(&config, &dictionary(), FrequencyStrategy).unwrap();

        assert!(result.success());
    }
}
