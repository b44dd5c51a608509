//! Placeholder content matching.
//!
//! Each [`PlaceholderRule`] is a literal string; it is escaped and compiled
//! once so that case-insensitive rules and case-sensitive rules share one
//! matching path.

use regex::{Regex, RegexBuilder};

use super::rules::PlaceholderRule;
use crate::error::{Result, SitecheckError};

/// A placeholder rule compiled for matching.
#[derive(Debug, Clone)]
struct CompiledPlaceholder {
    rule: PlaceholderRule,
    regex: Regex,
}

/// Matches file text against placeholder rules.
///
/// # Example
///
/// ```
/// use sitecheck::check::{PlaceholderMatcher, RuleSet};
///
/// let matcher = PlaceholderMatcher::new(&RuleSet::builtin().placeholders).unwrap();
///
/// let hits = matcher.find("url: \"https://EXAMPLE.com\"");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].pattern, "example.com");
///
/// assert!(matcher.find("url: \"https://acme-hvac.com\"").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderMatcher {
    patterns: Vec<CompiledPlaceholder>,
}

impl PlaceholderMatcher {
    /// Compile a list of rules, keeping their order.
    pub fn new(rules: &[PlaceholderRule]) -> Result<Self> {
        let patterns = rules
            .iter()
            .map(|rule| {
                if rule.pattern.is_empty() {
                    return Err(SitecheckError::ConfigValidationError {
                        message: format!(
                            "placeholder pattern for '{}' must not be empty",
                            rule.description
                        ),
                    });
                }
                let regex = RegexBuilder::new(&regex::escape(&rule.pattern))
                    .case_insensitive(rule.case_insensitive)
                    .build()
                    .map_err(|e| SitecheckError::ConfigValidationError {
                        message: format!("invalid placeholder '{}': {}", rule.pattern, e),
                    })?;
                Ok(CompiledPlaceholder {
                    rule: rule.clone(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Every rule matching somewhere in `text`, in rule order.
    ///
    /// Each rule is tested independently and reported at most once.
    pub fn find(&self, text: &str) -> Vec<&PlaceholderRule> {
        self.patterns
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| &p.rule)
            .collect()
    }
}
