//! Interval method selection
//!
//! The four supported methods form a closed enum. Callers that select a
//! method by name go through [`MethodChoice`], which keeps names outside the
//! supported set as data so the facade can answer them with the
//! [`Bound::MethodNotRecognized`](crate::Bound) sentinel instead of an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bootstrap interval construction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalMethod {
    /// Empirical quantiles of the bootstrap distribution
    Percentile,
    /// Percentile bounds reflected around the observed estimate
    Basic,
    /// Observed estimate plus/minus a normal quantile times the bootstrap SD
    Normal,
    /// Bias-corrected and accelerated percentile bounds
    Bca,
}

impl IntervalMethod {
    /// All supported methods
    pub const ALL: [IntervalMethod; 4] = [
        IntervalMethod::Percentile,
        IntervalMethod::Basic,
        IntervalMethod::Normal,
        IntervalMethod::Bca,
    ];

    /// Lowercase name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Percentile => "percentile",
            Self::Basic => "basic",
            Self::Normal => "normal",
            Self::Bca => "bca",
        }
    }

    /// Whether the method needs leave-one-out statistics
    pub fn needs_jackknife(&self) -> bool {
        matches!(self, Self::Bca)
    }
}

impl fmt::Display for IntervalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not match a supported method
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("method not recognized: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for IntervalMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentile" => Ok(Self::Percentile),
            "basic" => Ok(Self::Basic),
            "normal" => Ok(Self::Normal),
            "bca" => Ok(Self::Bca),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

/// A caller's method selection, which may name an unsupported method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MethodChoice {
    Known(IntervalMethod),
    Unrecognized(String),
}

impl MethodChoice {
    /// The supported method, if any
    pub fn method(&self) -> Option<IntervalMethod> {
        match self {
            Self::Known(method) => Some(*method),
            Self::Unrecognized(_) => None,
        }
    }
}

impl Default for MethodChoice {
    fn default() -> Self {
        Self::Known(IntervalMethod::Bca)
    }
}

impl From<IntervalMethod> for MethodChoice {
    fn from(method: IntervalMethod) -> Self {
        Self::Known(method)
    }
}

impl From<&str> for MethodChoice {
    fn from(name: &str) -> Self {
        match name.parse::<IntervalMethod>() {
            Ok(method) => Self::Known(method),
            Err(UnknownMethod(name)) => Self::Unrecognized(name),
        }
    }
}

impl From<String> for MethodChoice {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<MethodChoice> for String {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Known(method) => method.name().to_string(),
            MethodChoice::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for MethodChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(method) => method.fmt(f),
            Self::Unrecognized(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for method in IntervalMethod::ALL {
            assert_eq!(method.name().parse::<IntervalMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_abbreviations_are_rejected() {
        assert_eq!(
            "perc".parse::<IntervalMethod>().unwrap_err(),
            UnknownMethod("perc".to_string())
        );
        assert_eq!(
            "norm".parse::<IntervalMethod>().unwrap_err(),
            UnknownMethod("norm".to_string())
        );
        assert_eq!(MethodChoice::from("perc").method(), None);
        assert_eq!(MethodChoice::from("norm").method(), None);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "studentized".parse::<IntervalMethod>().unwrap_err();
        assert_eq!(err, UnknownMethod("studentized".to_string()));
        assert_eq!(err.to_string(), "method not recognized: studentized");
        // Names are case sensitive
        assert!("BCa".parse::<IntervalMethod>().is_err());
    }

    #[test]
    fn test_method_choice_from_str() {
        assert_eq!(MethodChoice::from("basic"), MethodChoice::Known(IntervalMethod::Basic));
        assert_eq!(
            MethodChoice::from("jackknife"),
            MethodChoice::Unrecognized("jackknife".to_string())
        );
        assert_eq!(MethodChoice::from("jackknife").method(), None);
        assert_eq!(MethodChoice::default().method(), Some(IntervalMethod::Bca));
    }

    #[test]
    fn test_needs_jackknife() {
        assert!(IntervalMethod::Bca.needs_jackknife());
        assert!(!IntervalMethod::Percentile.needs_jackknife());
        assert!(!IntervalMethod::Basic.needs_jackknife());
        assert!(!IntervalMethod::Normal.needs_jackknife());
    }
}
