//! Game engine for the word-guessing game.
//!
//! Everything in this module is synchronous and free of I/O: the HTTP layer
//! owns storage and word selection, and hands a [`Game`] to the engine to
//! mutate one guess at a time.
//!
//! # Architecture
//!
//! - [`mask`]: renders a word with unguessed letters hidden
//! - [`normalize_guess`]: turns raw client input into a single letter
//! - [`Game`]: per-session state machine (`Active` -> `Won` | `Lost`)
//! - [`GuessOutcome`]: what a single guess did to the game
//!
//! # Example
//!
//! ```rust
//! use hangman_server::game::{Game, GuessOutcome};
//!
//! let mut game = Game::new("cat", 6);
//! assert_eq!(game.masked(), "_ _ _");
//!
//! assert_eq!(game.guess("c"), GuessOutcome::Hit);
//! assert_eq!(game.masked(), "c _ _");
//! ```

mod mask;
mod state;

pub use mask::{PLACEHOLDER, is_letter, mask, normalize_guess};
pub use state::{DEFAULT_TURNS, Game, GuessOutcome, resolve_turns};
