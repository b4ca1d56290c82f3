//! Tag scanning: find every tag in a template and splice in replacements.
//!
//! The tag syntax belongs to the caller. A [`TagPattern`] is any regular
//! expression whose first two capture groups are the modifier symbol and the
//! key path, e.g. `\{test(\W+)([^}]+?)\}`.

use regex::Regex;

use crate::error::PatternError;

/// How many matches of a pattern are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Replace every non-overlapping match.
    #[default]
    All,
    /// Replace only the leftmost match.
    First,
}

/// A caller-supplied tag matcher with two captures: modifier, then key.
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
    mode: MatchMode,
}

impl TagPattern {
    /// Compile a pattern that replaces every tag.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, MatchMode::All)
    }

    /// Compile a pattern that replaces only the first tag.
    pub fn first(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, MatchMode::First)
    }

    /// Wrap an already compiled regex. Capture groups are not checked; groups
    /// that are missing or did not participate read as empty strings.
    pub fn from_regex(regex: Regex, mode: MatchMode) -> Self {
        Self { regex, mode }
    }

    fn compile(pattern: &str, mode: MatchMode) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group.
        let found = regex.captures_len().saturating_sub(1);
        if found < 2 {
            return Err(PatternError::MissingCaptures { found });
        }
        Ok(Self { regex, mode })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}

impl From<Regex> for TagPattern {
    fn from(regex: Regex) -> Self {
        Self::from_regex(regex, MatchMode::All)
    }
}

/// Replace each tag `pattern` finds in `template` with `render(modifier, key)`.
///
/// Matches are visited left to right and never overlap. Text between matches
/// is copied unchanged. The first error from `render` aborts the scan.
pub fn scan<E>(
    template: &str,
    pattern: &TagPattern,
    mut render: impl FnMut(&str, &str) -> Result<String, E>,
) -> Result<String, E> {
    let limit = match pattern.mode {
        MatchMode::All => usize::MAX,
        MatchMode::First => 1,
    };
    let mut output = String::with_capacity(template.len());
    let mut last = 0;
    for caps in pattern.regex.captures_iter(template).take(limit) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let modifier = caps.get(1).map_or("", |m| m.as_str());
        let key = caps.get(2).map_or("", |m| m.as_str());
        output.push_str(&template[last..whole.start()]);
        output.push_str(&render(modifier, key)?);
        last = whole.end();
    }
    output.push_str(&template[last..]);
    Ok(output)
}
