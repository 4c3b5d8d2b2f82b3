//! Per-session game state and the guess transition.

use std::collections::BTreeSet;

use super::mask::{mask, normalize_guess};

/// Turn budget used when a client asks for a non-positive one or none at all.
pub const DEFAULT_TURNS: u32 = 6;

/// Resolve a client-requested turn budget.
///
/// Positive requests are honoured (saturating at `u32::MAX`); zero, negative
/// or missing requests fall back to `default`.
#[must_use]
pub fn resolve_turns(requested: Option<i64>, default: u32) -> u32 {
    match requested {
        Some(turns) if turns > 0 => u32::try_from(turns).unwrap_or(u32::MAX),
        _ => default,
    }
}

/// Result of applying one guess to a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The game had already reached a terminal state; nothing changed.
    Finished,
    /// The input was not a single letter; nothing changed.
    Invalid,
    /// The letter was guessed before; nothing changed.
    AlreadyGuessed(char),
    /// New letter, not in the word. One turn was spent.
    Miss,
    /// New letter, in the word, and letters remain hidden.
    Hit,
    /// This guess revealed the last hidden letter.
    Won,
    /// This guess spent the last turn.
    Lost,
}

impl GuessOutcome {
    /// Whether this guess moved the game into a terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// State of a single game.
///
/// `word` never changes after construction, `guesses` only grows and
/// `turns` only shrinks. Once `done` is set no further guess mutates anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: String,
    guesses: BTreeSet<char>,
    turns: u32,
    done: bool,
}

impl Game {
    /// Start a game for `word` with the given turn budget.
    ///
    /// A zero budget produces a game that is already lost.
    #[must_use]
    pub fn new(word: impl Into<String>, turns: u32) -> Self {
        Self {
            word: word.into(),
            guesses: BTreeSet::new(),
            turns,
            done: turns == 0,
        }
    }

    /// The secret word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Remaining incorrect guesses allowed.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Whether the game has reached a terminal state.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Letters guessed so far, in ascending order.
    #[must_use]
    pub fn guessed(&self) -> Vec<String> {
        self.guesses.iter().map(char::to_string).collect()
    }

    /// The word with unguessed letters hidden.
    #[must_use]
    pub fn masked(&self) -> String {
        mask(&self.word, &self.guesses)
    }

    fn fully_revealed(&self) -> bool {
        self.word.chars().all(|c| self.guesses.contains(&c))
    }

    /// Apply one raw guess from a client.
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        if self.done {
            return GuessOutcome::Finished;
        }

        let Some(letter) = normalize_guess(raw) else {
            return GuessOutcome::Invalid;
        };

        if !self.guesses.insert(letter) {
            return GuessOutcome::AlreadyGuessed(letter);
        }

        if !self.word.contains(letter) {
            self.turns = self.turns.saturating_sub(1);
            if self.turns == 0 {
                self.done = true;
                return GuessOutcome::Lost;
            }
            return GuessOutcome::Miss;
        }

        if self.fully_revealed() {
            self.done = true;
            GuessOutcome::Won
        } else {
            GuessOutcome::Hit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_turns() {
        assert_eq!(resolve_turns(None, DEFAULT_TURNS), 6);
        assert_eq!(resolve_turns(Some(0), DEFAULT_TURNS), 6);
        assert_eq!(resolve_turns(Some(-4), DEFAULT_TURNS), 6);
        assert_eq!(resolve_turns(Some(3), DEFAULT_TURNS), 3);
        assert_eq!(resolve_turns(Some(i64::MAX), DEFAULT_TURNS), u32::MAX);
    }

    #[test]
    fn test_new_game_is_active() {
        let game = Game::new("cat", 6);
        assert_eq!(game.masked(), "_ _ _");
        assert_eq!(game.turns(), 6);
        assert!(game.guessed().is_empty());
        assert!(!game.is_done());
    }

    #[test]
    fn test_cat_walkthrough() {
        let mut game = Game::new("cat", 6);

        assert_eq!(game.guess("c"), GuessOutcome::Hit);
        assert_eq!(game.masked(), "c _ _");

        assert_eq!(game.guess("z"), GuessOutcome::Miss);
        assert_eq!(game.turns(), 5);
        assert_eq!(game.masked(), "c _ _");

        assert_eq!(game.guess("a"), GuessOutcome::Hit);
        assert_eq!(game.masked(), "c a _");

        assert_eq!(game.guess("t"), GuessOutcome::Won);
        assert_eq!(game.masked(), "c a t");
        assert!(game.is_done());
        assert_eq!(game.guessed(), vec!["a", "c", "t", "z"]);
    }

    #[test]
    fn test_three_misses_lose_with_three_turns() {
        let mut game = Game::new("cat", 3);

        assert_eq!(game.guess("x"), GuessOutcome::Miss);
        assert_eq!(game.guess("y"), GuessOutcome::Miss);
        assert_eq!(game.guess("z"), GuessOutcome::Lost);

        assert_eq!(game.turns(), 0);
        assert!(game.is_done());
    }

    #[test]
    fn test_repeated_guess_is_a_no_op() {
        let mut game = Game::new("cat", 6);

        game.guess("z");
        let before = game.clone();
        assert_eq!(game.guess("z"), GuessOutcome::AlreadyGuessed('z'));
        assert_eq!(game, before);

        game.guess("c");
        let before = game.clone();
        assert_eq!(game.guess("C"), GuessOutcome::AlreadyGuessed('c'));
        assert_eq!(game, before);
    }

    #[test]
    fn test_invalid_guess_leaves_state_untouched() {
        let mut game = Game::new("cat", 6);
        game.guess("c");
        let before = game.clone();

        assert_eq!(game.guess("ab"), GuessOutcome::Invalid);
        assert_eq!(game.guess("1"), GuessOutcome::Invalid);
        assert_eq!(game.guess(""), GuessOutcome::Invalid);
        assert_eq!(game, before);
    }

    #[test]
    fn test_finished_game_rejects_guesses() {
        let mut game = Game::new("a", 6);
        assert_eq!(game.guess("a"), GuessOutcome::Won);

        let before = game.clone();
        assert_eq!(game.guess("b"), GuessOutcome::Finished);
        assert_eq!(game, before);
    }

    #[test]
    fn test_every_distinct_letter_wins_before_turns_run_out() {
        let word = "deployment";
        let mut game = Game::new(word, 6);
        let mut seen = BTreeSet::new();
        let mut last = GuessOutcome::Invalid;

        for c in word.chars().filter(|c| seen.insert(*c)) {
            last = game.guess(&c.to_string());
        }

        assert_eq!(last, GuessOutcome::Won);
        assert_eq!(game.turns(), 6);
        assert!(game.is_done());
    }

    #[test]
    fn test_zero_budget_game_is_already_done() {
        let mut game = Game::new("cat", 0);
        assert!(game.is_done());
        assert_eq!(game.guess("c"), GuessOutcome::Finished);
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(GuessOutcome::Won.is_terminal());
        assert!(GuessOutcome::Lost.is_terminal());
        assert!(!GuessOutcome::Miss.is_terminal());
        assert!(!GuessOutcome::Finished.is_terminal());
    }
}
