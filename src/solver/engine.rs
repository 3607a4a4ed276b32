//! Game controller
//!
//! Each round: pick a letter, ask the user, turn the answer into a
//! [`Constraint`](super::Constraint), prune, then check for termination.

use super::adapter::{Adapter, AdapterError, Presence};
use super::candidates::{CandidateSet, PositionMode};
use super::strategy::Strategy;
use crate::core::{LetterSet, PartialWord, Positions, RevealError, Word};
use std::fmt;

/// Default wrong-guess budget
pub const MAX_WRONG: usize = 8;

/// Engine options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The game is lost once this many guesses were wrong
    pub max_wrong: usize,
    pub position_mode: PositionMode,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_wrong: usize, position_mode: PositionMode) -> Self {
        Self {
            max_wrong,
            position_mode,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_WRONG, PositionMode::Listed)
    }
}

/// What the user told us about a guessed letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Absent,
    /// Present at these positions; may be empty if the user gave none
    Present(Positions),
}

/// Where the game stands at the top of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status<'a> {
    /// Exactly one candidate left; offer it
    Final(&'a Word),
    /// Guess this letter next
    Guess(u8),
    Lost(LossReason),
}

/// Why a game ended without a win
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LossReason {
    /// Every candidate was eliminated (or none were loaded)
    NoCandidates,
    /// The wrong-guess budget ran out
    GuessBudgetExceeded,
    /// No unguessed letter occurs in the remaining candidates
    NoGuessAvailable,
    /// The user said the final word was not theirs
    Rejected(Word),
    /// The user stopped answering
    InputClosed,
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "no words left"),
            Self::GuessBudgetExceeded => write!(f, "out of guesses"),
            Self::NoGuessAvailable => write!(f, "no letters left to guess"),
            Self::Rejected(word) => write!(f, "'{word}' was rejected"),
            Self::InputClosed => write!(f, "input ended"),
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(Word),
    Loss(LossReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win(_))
    }
}

/// Errors that indicate a broken caller rather than a lost game
#[derive(Debug)]
pub enum GameError {
    /// The letter is outside a-z
    InvalidLetter(u8),
    /// The letter was already guessed
    AlreadyGuessed(u8),
    Reveal(RevealError),
    Adapter(AdapterError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(letter) => write!(f, "Not a lowercase letter: {letter:#04x}"),
            Self::AlreadyGuessed(letter) => {
                write!(f, "Letter '{}' was already guessed", char::from(*letter))
            }
            Self::Reveal(e) => write!(f, "{e}"),
            Self::Adapter(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reveal(e) => Some(e),
            Self::Adapter(e) => Some(e),
            Self::InvalidLetter(_) | Self::AlreadyGuessed(_) => None,
        }
    }
}

impl From<RevealError> for GameError {
    fn from(e: RevealError) -> Self {
        Self::Reveal(e)
    }
}

impl From<AdapterError> for GameError {
    fn from(e: AdapterError) -> Self {
        Self::Adapter(e)
    }
}

/// A single reverse-hangman game
///
/// # Examples
/// ```
/// use reverse_hangman::core::{Positions, Word};
/// use reverse_hangman::solver::{Feedback, FrequencyStrategy, Game, GameConfig, Status};
///
/// let words = ["ab", "ba"].into_iter().map(|w| Word::new(w).unwrap()).collect();
/// let mut game = Game::new(FrequencyStrategy, words, 2, GameConfig::default());
///
/// assert_eq!(game.status(), Status::Guess(b'a'));
/// let positions = Positions::new([0], 2).unwrap();
/// game.apply(b'a', Feedback::Present(positions)).unwrap();
///
/// assert!(matches!(game.status(), Status::Final(word) if word.text() == "ab"));
/// ```
#[derive(Debug, Clone)]
pub struct Game<S: Strategy> {
    strategy: S,
    config: GameConfig,
    candidates: CandidateSet,
    guessed: LetterSet,
    wrong: usize,
    partial: PartialWord,
    rounds: usize,
}

impl<S: Strategy> Game<S> {
    /// Start a game for a secret word of `length` letters
    ///
    /// Words of any other length are dropped.
    #[must_use]
    pub fn new(strategy: S, words: Vec<Word>, length: usize, config: GameConfig) -> Self {
        let candidates = words.into_iter().filter(|w| w.len() == length).collect();
        Self {
            strategy,
            config,
            candidates,
            guessed: LetterSet::EMPTY,
            wrong: 0,
            partial: PartialWord::new(length),
            rounds: 0,
        }
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong
    }

    #[must_use]
    pub const fn partial(&self) -> &PartialWord {
        &self.partial
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.partial.len()
    }

    /// Rounds played so far
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Decide what happens next
    ///
    /// A single remaining candidate is offered even when the wrong-guess
    /// budget is spent.
    #[must_use]
    pub fn status(&self) -> Status<'_> {
        if let Some(word) = self.candidates.sole_member() {
            return Status::Final(word);
        }
        if self.candidates.is_empty() {
            return Status::Lost(LossReason::NoCandidates);
        }
        if self.wrong >= self.config.max_wrong {
            return Status::Lost(LossReason::GuessBudgetExceeded);
        }
        match self.strategy.select_letter(&self.candidates, self.guessed) {
            Some(letter) => Status::Guess(letter),
            None => Status::Lost(LossReason::NoGuessAvailable),
        }
    }

    /// Record the answer for `letter` and prune the candidates
    ///
    /// An absent letter costs one wrong guess. A present letter with no
    /// positions is only marked as guessed.
    ///
    /// # Errors
    /// Returns `GameError` if the letter is not a-z, was already guessed, or
    /// a position lies outside the word or already shows another letter.
    /// Nothing changes on error.
    pub fn apply(&mut self, letter: u8, feedback: Feedback) -> Result<(), GameError> {
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.guessed.contains(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }

        match feedback {
            Feedback::Absent => {
                self.candidates.prune_absent(letter);
                self.wrong += 1;
            }
            Feedback::Present(positions) => {
                let mut revealed = self.partial.clone();
                revealed.reveal(letter, positions.as_slice())?;
                self.partial = revealed;
                self.candidates
                    .prune_positional(letter, positions, self.config.position_mode);
            }
        }

        self.guessed.insert(letter);
        self.rounds += 1;
        Ok(())
    }

    /// Play to the end, asking `adapter` for every answer
    ///
    /// Running out of input ends the game as a loss.
    ///
    /// # Errors
    /// Returns `GameError` if the adapter fails for a reason other than
    /// closed input, or if it hands back positions outside the word.
    pub fn play<A: Adapter>(&mut self, adapter: &mut A) -> Result<Outcome, GameError> {
        match self.drive(adapter) {
            Err(GameError::Adapter(AdapterError::InputClosed)) => {
                Ok(Outcome::Loss(LossReason::InputClosed))
            }
            result => result,
        }
    }

    fn drive<A: Adapter>(&mut self, adapter: &mut A) -> Result<Outcome, GameError> {
        loop {
            let letter = match self.status() {
                Status::Final(word) => {
                    let word = word.clone();
                    return if adapter.ask_final_word_confirmation(&word)? {
                        Ok(Outcome::Win(word))
                    } else {
                        Ok(Outcome::Loss(LossReason::Rejected(word)))
                    };
                }
                Status::Lost(reason) => return Ok(Outcome::Loss(reason)),
                Status::Guess(letter) => letter,
            };

            adapter.announce_guess(letter)?;
            match adapter.ask_letter_confirmation(letter)? {
                Presence::Absent => {
                    self.apply(letter, Feedback::Absent)?;
                    adapter.announce_wrong_count(self.wrong, self.config.max_wrong)?;
                }
                Presence::Present => {
                    let positions = adapter.ask_positions(letter, self.length())?;
                    match self.apply(letter, Feedback::Present(positions)) {
                        // Every candidate already has another letter there
                        Err(GameError::Reveal(e)) if e.is_conflict() => {
                            return Ok(Outcome::Loss(LossReason::NoCandidates));
                        }
                        result => result?,
                    }
                    adapter.announce_partial(&self.partial)?;
                }
            }
            adapter.announce_remaining(self.candidates.len())?;
        }
    }
}
