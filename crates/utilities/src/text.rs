//! String formatting helpers.

use serde_json::Value;

use crate::error::UtilityError;

/// Words kept lowercase by [`title_case`] unless they start the string.
pub const DEFAULT_MINOR_WORDS: [&str; 3] = ["of", "the", "in"];

/// Configuration for title casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCaseConfig {
    minor_words: Vec<String>,
}

impl TitleCaseConfig {
    /// Create a config from a list of minor words. Words are matched
    /// case-insensitively; blank entries are ignored.
    pub fn new<I, S>(minor_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            minor_words: minor_words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Parse a comma-separated minor word list, e.g. `"of,the,in,and"`.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn minor_words(&self) -> &[String] {
        &self.minor_words
    }

    fn is_minor(&self, word: &str) -> bool {
        self.minor_words.iter().any(|minor| minor == word)
    }
}

impl Default for TitleCaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MINOR_WORDS)
    }
}

/// Removes all whitespace and lowercases a string for loose comparison.
///
/// # Examples
///
/// ```
/// use nc_utilities::shrink;
///
/// assert_eq!(shrink(" A B "), "ab");
/// assert_eq!(shrink("Animal\tMessenger"), "animalmessenger");
/// ```
pub fn shrink(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Converts a string from any case (including `snake_case`) to Title Case.
///
/// Underscores become spaces and every word is capitalized, except the minor
/// words "of", "the" and "in", which stay lowercase unless they open the
/// string.
///
/// # Examples
///
/// ```
/// use nc_utilities::title_case;
///
/// assert_eq!(title_case("fireball_of_doom"), "Fireball of Doom");
/// assert_eq!(title_case("THE_WALL_IN_THE_NORTH"), "The Wall in the North");
/// ```
pub fn title_case(s: &str) -> String {
    title_case_with(s, &TitleCaseConfig::default())
}

/// [`title_case`] with a custom minor word list.
pub fn title_case_with(s: &str, config: &TitleCaseConfig) -> String {
    let lowered = s.replace('_', " ").to_lowercase();
    let joined = lowered
        .split(' ')
        .map(|word| {
            // Punctuation around a word does not stop it being minor
            let core = word.trim_matches(|c: char| !c.is_alphanumeric());
            if config.is_minor(core) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    capitalize(&joined)
}

/// [`title_case`] for a JSON value that is expected to hold a string.
pub fn title_case_value(value: &Value) -> Result<String, UtilityError> {
    match value {
        Value::String(s) => Ok(title_case(s)),
        other => {
            tracing::debug!(found = ?other, "title_case_value rejected non-string input");
            Err(UtilityError::not_a_string(other))
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
