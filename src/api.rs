//! JSON request and response bodies for the game endpoints.
//!
//! Every game-level outcome, including errors, is a `200 OK` carrying a
//! [`Message`]; `level` is only a styling hint for the client.

use serde::{Deserialize, Serialize};

use crate::game::{Game, GuessOutcome};

/// Advisory severity of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Error,
    Warning,
}

/// Human-readable status line returned with every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub level: Level,
}

impl Message {
    pub fn new(text: impl Into<String>, level: Level) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn started() -> Self {
        Self::new("Game started.", Level::Success)
    }

    pub fn session_not_found() -> Self {
        Self::new("Session not found. Start a new game.", Level::Error)
    }

    pub fn reset() -> Self {
        Self::new("Game reset.", Level::Warning)
    }

    /// Message describing what a guess did to `game`.
    pub fn for_outcome(outcome: GuessOutcome, game: &Game) -> Self {
        match outcome {
            GuessOutcome::Finished => {
                Self::new("Game already finished. Start a new game.", Level::Info)
            }
            GuessOutcome::Invalid => Self::new("Enter a single letter (a-z).", Level::Error),
            GuessOutcome::AlreadyGuessed(c) => {
                Self::new(format!("'{c}' already guessed."), Level::Info)
            }
            GuessOutcome::Miss => Self::new("Wrong guess.", Level::Info),
            GuessOutcome::Lost => Self::new(
                format!("You lose. The word was '{}'.", game.word()),
                Level::Error,
            ),
            GuessOutcome::Hit => Self::new("Good guess!", Level::Success),
            GuessOutcome::Won => Self::new("Congratulations! You win!", Level::Success),
        }
    }
}

/// `POST /start` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartRequest {
    /// Requested turn budget; non-positive or missing uses the default.
    #[serde(default)]
    pub turns: Option<i64>,
    /// Client-chosen session id; missing or empty gets a fresh UUID.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// `POST /start` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
    pub message: Message,
    pub masked: String,
    pub turns: u32,
    pub guessed: Vec<String>,
}

/// `POST /guess` body.
#[derive(Debug, Clone, Deserialize)]
pub struct GuessRequest {
    pub session_id: String,
    pub guess_char: String,
}

/// `POST /guess` response.
///
/// Which game fields are present depends on the outcome: unknown sessions
/// and finished games carry only the message; rejected guesses omit `done`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessResponse {
    pub message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guessed: Option<Vec<String>>,
}

impl GuessResponse {
    /// Response carrying only a message.
    pub fn message_only(message: Message) -> Self {
        Self {
            message,
            done: None,
            masked: None,
            turns: None,
            guessed: None,
        }
    }

    /// Response for a guess applied to `game`.
    pub fn from_outcome(outcome: GuessOutcome, game: &Game) -> Self {
        let message = Message::for_outcome(outcome, game);
        match outcome {
            GuessOutcome::Finished => Self::message_only(message),
            GuessOutcome::Invalid | GuessOutcome::AlreadyGuessed(_) => Self {
                message,
                done: None,
                masked: Some(game.masked()),
                turns: Some(game.turns()),
                guessed: Some(game.guessed()),
            },
            GuessOutcome::Miss | GuessOutcome::Hit | GuessOutcome::Won | GuessOutcome::Lost => {
                Self {
                    message,
                    done: Some(outcome.is_terminal()),
                    masked: Some(game.masked()),
                    turns: Some(game.turns()),
                    guessed: Some(game.guessed()),
                }
            }
        }
    }
}

/// `POST /reset` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// `POST /reset` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub message: Message,
}
