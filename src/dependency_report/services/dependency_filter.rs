use crate::shared::error::ReportError;
use crate::shared::Result;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Maximum length of an exclusion pattern
const MAX_PATTERN_LENGTH: usize = 1024;

/// How the exclusion pattern is matched against dependency names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcludeMode {
    /// Unanchored regular-expression search
    #[default]
    Regex,
    /// Plain substring containment
    Substring,
}

impl FromStr for ExcludeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regex" => Ok(ExcludeMode::Regex),
            "substring" => Ok(ExcludeMode::Substring),
            _ => Err(format!(
                "Invalid exclude mode: {}. Valid values are: regex, substring",
                s
            )),
        }
    }
}

impl fmt::Display for ExcludeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcludeMode::Regex => write!(f, "regex"),
            ExcludeMode::Substring => write!(f, "substring"),
        }
    }
}

#[derive(Debug)]
enum Matcher {
    Regex(Regex),
    Substring(String),
}

/// Decides whether a dependency name is excluded from the report.
///
/// An excluded dependency contributes no usage row and no metadata lookup.
#[derive(Debug)]
pub struct DependencyFilter {
    matcher: Option<Matcher>,
}

impl DependencyFilter {
    /// Filter that excludes nothing
    pub fn none() -> Self {
        Self { matcher: None }
    }

    /// Builds a filter from an optional pattern. An empty pattern excludes nothing.
    ///
    /// # Errors
    /// Returns [`ReportError::InvalidExcludePattern`] when the pattern is too long
    /// or is not a valid regular expression in [`ExcludeMode::Regex`].
    pub fn new(pattern: Option<&str>, mode: ExcludeMode) -> Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(Self::none()),
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(ReportError::InvalidExcludePattern {
                pattern: pattern.to_string(),
                details: format!(
                    "pattern is too long ({} bytes). Maximum allowed: {} bytes",
                    pattern.len(),
                    MAX_PATTERN_LENGTH
                ),
            }
            .into());
        }

        let matcher = match mode {
            ExcludeMode::Regex => Matcher::Regex(Regex::new(pattern).map_err(|e| {
                ReportError::InvalidExcludePattern {
                    pattern: pattern.to_string(),
                    details: e.to_string(),
                }
            })?),
            ExcludeMode::Substring => Matcher::Substring(pattern.to_string()),
        };

        Ok(Self {
            matcher: Some(matcher),
        })
    }

    pub fn is_excluded(&self, dependency_name: &str) -> bool {
        match &self.matcher {
            None => false,
            Some(Matcher::Regex(re)) => re.is_match(dependency_name),
            Some(Matcher::Substring(s)) => dependency_name.contains(s.as_str()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.matcher.is_some()
    }
}
