//! Configuration handling for exportmirror

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
use crate::error::{AlphabetError, MirrorError, MirrorResult};
use crate::sequence::SequenceGenerator;

/// Directory under a project root that holds `config.toml`.
pub const CONFIG_DIR: &str = ".exportmirror";

/// Quote character the generated values will be embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Single,
    Double,
    Backtick,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
            QuoteStyle::Backtick => '`',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStyle::Single => "single",
            QuoteStyle::Double => "double",
            QuoteStyle::Backtick => "backtick",
        }
    }

    /// Whether `symbol` can appear inside this kind of literal unescaped.
    pub fn allows(self, symbol: char) -> bool {
        let forbidden = symbol == self.as_char()
            || symbol == '\\'
            || matches!(symbol, '\n' | '\r' | '\u{2028}' | '\u{2029}');
        let template_hole = self == QuoteStyle::Backtick && symbol == '$';
        !(forbidden || template_hole)
    }
}

/// exportmirror configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Symbols used as digits, in order
    #[serde(default = "default_alphabet")]
    pub alphabet: String,

    /// First counter value handed out
    #[serde(default)]
    pub start: u64,

    /// Reject alphabets that are unsafe inside this quote style
    #[serde(default)]
    pub quote: Option<QuoteStyle>,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            start: 0,
            quote: None,
        }
    }
}

impl MirrorConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> MirrorResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MirrorError::config(format!("failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> MirrorResult<Self> {
        toml::from_str(content)
            .map_err(|e| MirrorError::config(format!("failed to parse config file: {}", e)))
    }

    /// Load configuration from .exportmirror/config.toml in the given project root
    pub fn load_from_project(project_root: &Path) -> MirrorResult<Self> {
        let config_path = project_root.join(CONFIG_DIR).join("config.toml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(MirrorConfig::default())
        }
    }

    /// Validate and build the configured alphabet.
    pub fn alphabet(&self) -> MirrorResult<Alphabet> {
        let alphabet = Alphabet::parse(&self.alphabet)?;
        if let Some(quote) = self.quote {
            if let Some(symbol) = alphabet.iter().find(|&s| !quote.allows(s)) {
                return Err(AlphabetError::UnsafeSymbol {
                    symbol,
                    quote: quote.as_str().to_string(),
                }
                .into());
            }
        }
        Ok(alphabet)
    }

    /// Build a generator positioned at `start`.
    pub fn build_generator(&self) -> MirrorResult<SequenceGenerator> {
        Ok(SequenceGenerator::starting_from(self.alphabet()?, self.start))
    }
}
