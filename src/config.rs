//! Layered service configuration.
//!
//! Priority, highest first: CLI flag (or its env var), `HANGMAN_`-prefixed
//! environment variables, config file, built-in defaults.

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::game::DEFAULT_TURNS;
use crate::words::{DEFAULT_WORD_API_URL, DEFAULT_WORDS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Random-word service endpoint
    #[arg(long, env = "WORD_API_URL")]
    pub word_api_url: Option<String>,

    /// Skip the random-word service and only use the local list
    #[arg(long, env = "WORDS_OFFLINE")]
    pub offline: Option<bool>,

    /// Disable the request timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub game: GameConfig,
    pub words: WordsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` for the `/game` page.
    pub static_dir: String,
    pub request_timeout_secs: u64,
    pub timeout_disabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// Turn budget for starts that request none or a non-positive one.
    pub default_turns: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WordsConfig {
    pub api_url: String,
    pub timeout_ms: u64,
    pub remote_enabled: bool,
    #[serde(default = "default_fallback_words")]
    pub fallback: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub json: bool,
}

fn default_fallback_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(ToString::to_string).collect()
}

impl AppConfig {
    /// Load configuration from the process arguments and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.static_dir", "static")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("server.timeout_disabled", false)?
            .set_default("game.default_turns", i64::from(DEFAULT_TURNS))?
            .set_default("words.api_url", DEFAULT_WORD_API_URL)?
            .set_default("words.timeout_ms", 3000)?
            .set_default("words.remote_enabled", true)?
            .set_default("logging.json", false)?;

        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. HANGMAN_SERVER__PORT=9000, HANGMAN_WORDS__FALLBACK=cat,dog
        builder = builder.add_source(
            Environment::with_prefix("HANGMAN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("words.fallback"),
        );

        if let Some(host) = &cli.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = &cli.word_api_url {
            builder = builder.set_override("words.api_url", url.as_str())?;
        }
        if let Some(offline) = cli.offline {
            builder = builder.set_override("words.remote_enabled", !offline)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("server.timeout_disabled", td)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.game.default_turns == 0 {
            return Err(ConfigError::Message(
                "game.default_turns must be positive".to_string(),
            ));
        }
        if self.words.fallback.is_empty() {
            return Err(ConfigError::Message(
                "words.fallback must contain at least one word".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "server.request_timeout_secs must be positive".to_string(),
            ));
        }
        // A word fetch must give up before the request deadline so /start can fall back.
        if !self.server.timeout_disabled
            && self.words.timeout_ms >= self.server.request_timeout_secs.saturating_mul(1000)
        {
            return Err(ConfigError::Message(format!(
                "words.timeout_ms ({}) must be below server.request_timeout_secs ({}s)",
                self.words.timeout_ms, self.server.request_timeout_secs
            )));
        }
        Ok(())
    }
}
