//! The result contract shared by every validator.

use core::fmt;

use serde::Serialize;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks progression; forces `valid = false`.
    Error,
    /// Discouraged but tolerated.
    Warning,
    /// Best-practice suggestion.
    Recommendation,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Recommendation => write!(f, "recommendation"),
        }
    }
}

/// Outcome of validating one configuration subtree.
///
/// `valid` is kept in lock-step with `errors`: it is false exactly when at
/// least one error has been recorded. Warnings and recommendations never
/// affect it. Messages keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    recommendations: Vec<String>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// An empty, passing result.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Record a blocking error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    /// Record a non-blocking warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record a best-practice recommendation.
    pub fn recommend(&mut self, message: impl Into<String>) {
        self.recommendations.push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// True when nothing at all was recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.recommendations.is_empty()
    }

    /// Append every finding of `other`, preserving order within each list.
    pub fn merge(&mut self, other: Diagnostics) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.recommendations.extend(other.recommendations);
    }

    /// Iterate all findings tagged with their severity: errors first, then
    /// warnings, then recommendations.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &str)> {
        self.errors
            .iter()
            .map(|m| (Severity::Error, m.as_str()))
            .chain(self.warnings.iter().map(|m| (Severity::Warning, m.as_str())))
            .chain(
                self.recommendations
                    .iter()
                    .map(|m| (Severity::Recommendation, m.as_str())),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_valid_and_clean() {
        let d = Diagnostics::new();
        assert!(d.is_valid());
        assert!(d.is_clean());
    }

    #[test]
    fn test_error_clears_valid() {
        let mut d = Diagnostics::new();
        d.warn("w");
        d.recommend("r");
        assert!(d.is_valid());
        d.error("e");
        assert!(!d.is_valid());
        assert_eq!(d.errors(), ["e"]);
    }

    #[test]
    fn test_merge_propagates_failure() {
        let mut a = Diagnostics::new();
        a.recommend("first");
        let mut b = Diagnostics::new();
        b.error("broken");
        b.recommend("second");
        a.merge(b);
        assert!(!a.is_valid());
        assert_eq!(a.recommendations(), ["first", "second"]);
    }

    #[test]
    fn test_iter_orders_by_severity() {
        let mut d = Diagnostics::new();
        d.recommend("r");
        d.warn("w");
        d.error("e");
        let severities: Vec<Severity> = d.iter().map(|(s, _)| s).collect();
        assert_eq!(
            severities,
            [Severity::Error, Severity::Warning, Severity::Recommendation]
        );
    }

    #[test]
    fn test_serializes_valid_flag() {
        let mut d = Diagnostics::new();
        d.error("missing");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0], "missing");
    }
}
