//! Interactive terminal game
//!
//! The user thinks of a word; the solver asks about letters on stdin/stdout.

use crate::core::{PartialWord, Positions, Word};
use crate::output::formatters::spaced;
use crate::solver::{
    Adapter, AdapterError, Game, GameConfig, GameError, LossReason, Outcome, Presence,
    StrategyType,
};
use crate::wordlists::{DEFAULT_WORDLIST, DictionaryError, load_from_file};
use colored::Colorize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Sentinel that ends position entry (one-based)
pub const STOP_ENTRY: i64 = -1;

/// Options for an interactive session
#[derive(Debug, Clone)]
pub struct PlaySettings {
    pub wordlist: PathBuf,
    pub strategy: StrategyType,
    pub config: GameConfig,
    /// Re-ask when a confirmed letter is given no positions
    pub reprompt_empty: bool,
}

impl Default for PlaySettings {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            strategy: StrategyType::default(),
            config: GameConfig::default(),
            reprompt_empty: false,
        }
    }
}

/// A line of user input that could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Expected a number
    NotANumber(String),
    /// A position outside `1..=length`
    OutOfRange { value: i64, length: usize },
    /// A word length below one
    NotPositive(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(text) => write!(f, "'{text}' is not a number"),
            Self::OutOfRange { value, length } => {
                write!(f, "{value} is not between 1 and {length}")
            }
            Self::NotPositive(value) => write!(f, "{value} is not a positive number"),
        }
    }
}

impl std::error::Error for InputError {}

/// One entry of the position prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionEntry {
    /// Zero-based position
    At(usize),
    Stop,
}

/// Parse a one-based position or the stop sentinel
///
/// # Errors
/// Returns `InputError` for non-numeric text or a number outside `1..=length`.
///
/// # Examples
/// ```
/// use reverse_hangman::commands::play::{PositionEntry, parse_position_entry};
///
/// assert_eq!(parse_position_entry("2", 5), Ok(PositionEntry::At(1)));
/// assert_eq!(parse_position_entry("-1", 5), Ok(PositionEntry::Stop));
/// assert!(parse_position_entry("6", 5).is_err());
/// assert!(parse_position_entry("two", 5).is_err());
/// ```
pub fn parse_position_entry(text: &str, length: usize) -> Result<PositionEntry, InputError> {
    let text = text.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;

    if value == STOP_ENTRY {
        return Ok(PositionEntry::Stop);
    }
    match usize::try_from(value) {
        Ok(position) if (1..=length).contains(&position) => Ok(PositionEntry::At(position - 1)),
        _ => Err(InputError::OutOfRange { value, length }),
    }
}

/// Parse a positive word length
///
/// # Errors
/// Returns `InputError` for non-numeric text or zero.
pub fn parse_length(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    match usize::try_from(value) {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(InputError::NotPositive(value)),
    }
}

/// Interpret a yes/no answer, case-insensitively
#[must_use]
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Adapter over a line-oriented reader and a writer
pub struct StdioAdapter<R, W> {
    input: R,
    output: W,
    reprompt_empty: bool,
}

impl<R: BufRead, W: Write> StdioAdapter<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            reprompt_empty: false,
        }
    }

    #[must_use]
    pub const fn with_reprompt_empty(mut self, reprompt_empty: bool) -> Self {
        self.reprompt_empty = reprompt_empty;
        self
    }

    /// Give back the writer, e.g. to inspect captured output
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner
    ///
    /// # Errors
    /// Returns `AdapterError` if the output cannot be written.
    pub fn welcome(&mut self) -> Result<(), AdapterError> {
        writeln!(
            self.output,
            "{}",
            "Welcome, this program is named Reverse-Hangman."
                .bright_cyan()
                .bold()
        )?;
        writeln!(
            self.output,
            "Think of a word. I will guess its letters; answer honestly!"
        )?;
        Ok(())
    }

    /// Tell the user the dictionary could not be loaded
    ///
    /// # Errors
    /// Returns `AdapterError` if the output cannot be written.
    pub fn report_dictionary_error(
        &mut self,
        error: &DictionaryError,
    ) -> Result<(), AdapterError> {
        writeln!(self.output, "{}", error.to_string().red())?;
        Ok(())
    }

    /// Tell the user no dictionary word has the chosen length
    ///
    /// # Errors
    /// Returns `AdapterError` if the output cannot be written.
    pub fn report_no_words(&mut self, length: usize) -> Result<(), AdapterError> {
        writeln!(
            self.output,
            "{}",
            format!("No words with {length} letters in the dictionary.").red()
        )?;
        Ok(())
    }

    /// Print the verdict and sign-off
    ///
    /// # Errors
    /// Returns `AdapterError` if the output cannot be written.
    pub fn report_outcome(&mut self, outcome: &Outcome) -> Result<(), AdapterError> {
        match outcome {
            Outcome::Win(_) => writeln!(self.output, "{}", "I won.".bright_green().bold())?,
            Outcome::Loss(reason) => {
                writeln!(self.output, "{}", "I lost.".bright_red().bold())?;
                if !matches!(reason, LossReason::Rejected(_)) {
                    writeln!(self.output, "{}", format!("({reason})").bright_black())?;
                }
            }
        }
        writeln!(self.output, "Thanks for playing, see you next time.")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, AdapterError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AdapterError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt(&mut self, question: &str) -> Result<String, AdapterError> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool, AdapterError> {
        let mut answer = self.prompt(question)?;
        loop {
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }
            answer = self.prompt(&"Please answer y or n:".yellow().to_string())?;
        }
    }

    fn invalid(&mut self, error: &InputError) -> Result<(), AdapterError> {
        writeln!(
            self.output,
            "{}",
            format!("Invalid input ({error}), please try again:").yellow()
        )?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Adapter for StdioAdapter<R, W> {
    fn ask_length(&mut self) -> Result<usize, AdapterError> {
        loop {
            let answer = self.prompt("Enter the number of letters your chosen word has: ")?;
            match parse_length(&answer) {
                Ok(length) => return Ok(length),
                Err(e) => self.invalid(&e)?,
            }
        }
    }

    fn ask_letter_confirmation(&mut self, letter: u8) -> Result<Presence, AdapterError> {
        let question = format!("My guess is: {} (y/n) ", char::from(letter));
        if self.ask_yes_no(&question)? {
            Ok(Presence::Present)
        } else {
            Ok(Presence::Absent)
        }
    }

    fn ask_positions(&mut self, letter: u8, length: usize) -> Result<Positions, AdapterError> {
        let question = format!(
            "Enter the positions of the letter in your word (1-{length}). {STOP_ENTRY} to stop: "
        );
        loop {
            let mut indices = Vec::new();
            loop {
                let answer = self.prompt(&question)?;
                match parse_position_entry(&answer, length) {
                    Ok(PositionEntry::Stop) => break,
                    Ok(PositionEntry::At(position)) => {
                        indices.push(position);
                        writeln!(self.output, "Added letter.")?;
                    }
                    Err(e) => self.invalid(&e)?,
                }
            }

            if indices.is_empty() && self.reprompt_empty {
                writeln!(
                    self.output,
                    "{}",
                    format!(
                        "'{}' is in your word, so give at least one position.",
                        char::from(letter)
                    )
                    .yellow()
                )?;
                continue;
            }

            return Positions::new(indices, length)
                .map_err(|e| AdapterError::Io(io::Error::new(io::ErrorKind::InvalidData, e)));
        }
    }

    fn ask_final_word_confirmation(&mut self, word: &Word) -> Result<bool, AdapterError> {
        self.ask_yes_no(&format!("Your chosen word is {word}?(y/n) "))
    }

    // The confirmation prompt already names the letter
    fn announce_guess(&mut self, _letter: u8) -> Result<(), AdapterError> {
        Ok(())
    }

    fn announce_wrong_count(
        &mut self,
        wrong: usize,
        max_wrong: usize,
    ) -> Result<(), AdapterError> {
        writeln!(
            self.output,
            "{}",
            format!("Currently have {wrong} wrong guesses (of {max_wrong}).").yellow()
        )?;
        Ok(())
    }

    fn announce_remaining(&mut self, remaining: usize) -> Result<(), AdapterError> {
        writeln!(self.output, "{remaining} remaining possibilities.")?;
        Ok(())
    }

    fn announce_partial(&mut self, partial: &PartialWord) -> Result<(), AdapterError> {
        writeln!(self.output, "{}", spaced(&partial.render()).bright_cyan())?;
        Ok(())
    }
}

/// Play one game against the user behind `adapter`
///
/// A missing dictionary, or one without words of the chosen length, is
/// reported and the game is lost without any letter being guessed.
///
/// # Errors
///
/// Returns `GameError` if reading or writing fails for a reason other than
/// input ending.
pub fn play_session<R: BufRead, W: Write>(
    adapter: &mut StdioAdapter<R, W>,
    settings: &PlaySettings,
) -> Result<Outcome, GameError> {
    adapter.welcome()?;

    let length = match adapter.ask_length() {
        Ok(length) => length,
        Err(AdapterError::InputClosed) => {
            let outcome = Outcome::Loss(LossReason::InputClosed);
            adapter.report_outcome(&outcome)?;
            return Ok(outcome);
        }
        Err(e) => return Err(e.into()),
    };
    let words = match load_from_file(&settings.wordlist, Some(length)) {
        Ok(words) => {
            if words.is_empty() {
                adapter.report_no_words(length)?;
            }
            words
        }
        Err(error) => {
            adapter.report_dictionary_error(&error)?;
            Vec::new()
        }
    };
    if words.is_empty() {
        let outcome = Outcome::Loss(LossReason::NoCandidates);
        adapter.report_outcome(&outcome)?;
        return Ok(outcome);
    }

    // Every loaded word has `length` letters, which bounds the buffer
    adapter.announce_partial(&PartialWord::new(length))?;

    let mut game = Game::new(settings.strategy, words, length, settings.config);
    let outcome = game.play(adapter)?;
    adapter.report_outcome(&outcome)?;
    Ok(outcome)
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run_play(settings: &PlaySettings) -> Result<Outcome, GameError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut adapter = StdioAdapter::new(stdin.lock(), stdout.lock())
        .with_reprompt_empty(settings.reprompt_empty);
    play_session(&mut adapter, settings)
}
