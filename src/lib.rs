//! Reverse Hangman
//!
//! You think of a word; the solver deduces it by guessing letters, keeping
//! only the dictionary words consistent with your answers.
//!
//! # Quick Start
//!
//! ```rust
//! use reverse_hangman::core::{Positions, Word};
//! use reverse_hangman::solver::{Feedback, FrequencyStrategy, Game, GameConfig, Status};
//!
//! let words = ["cat", "dog", "bat", "rat"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut game = Game::new(FrequencyStrategy, words, 3, GameConfig::default());
//!
//! // 'a' is the most frequent letter (tied with 't', which sorts later)
//! assert_eq!(game.status(), Status::Guess(b'a'));
//!
//! // The secret word has 'a' in the middle
//! game.apply(b'a', Feedback::Present(Positions::new([1], 3).unwrap()))
//!     .unwrap();
//! assert_eq!(game.candidates().len(), 3);
//! assert_eq!(game.partial().render(), "_a_");
//! ```

// Core domain types
pub mod core;

// Candidate pruning, letter selection and the game controller
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
