//! crates/logging/src/severity.rs
//! Ordered severity taxonomy and canonical name mapping.

use std::fmt;
use std::str::FromStr;

/// Name reported for integer values that fall outside the taxonomy.
const UNKNOWN_NAME: &str = "UNKNOWN";

/// Severity of a diagnostic message.
///
/// Severities compare by declaration order, so
/// `Trace < Debug < Info < Warning < Error`. That ordering drives level
/// filtering: a [`Logger`](crate::Logger) emits a message only when the
/// message severity is at or above the logger's configured threshold.
///
/// # Examples
///
/// ```
/// use logging::Severity;
///
/// assert!(Severity::Trace < Severity::Debug);
/// assert!(Severity::Warning < Severity::Error);
/// assert_eq!(Severity::Info.as_str(), "Info");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fine-grained tracing output.
    Trace = 0,
    /// Diagnostic detail useful while debugging.
    Debug = 1,
    /// Routine informational message.
    Info = 2,
    /// Something suspicious that does not stop the operation.
    Warning = 3,
    /// A failure worth reporting.
    Error = 4,
}

impl Severity {
    /// Returns the canonical display name of this severity.
    ///
    /// The names are a stable contract: they prefix every emitted log line
    /// and feed [`name_of`] for the defined range.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Trace.as_str(), "Trace");
    /// assert_eq!(Severity::Error.as_str(), "Error");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Maps an integer back into the taxonomy.
    ///
    /// Returns `None` for values outside `0..=4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::from_index(0), Some(Severity::Trace));
    /// assert_eq!(Severity::from_index(4), Some(Severity::Error));
    /// assert_eq!(Severity::from_index(5), None);
    /// assert_eq!(Severity::from_index(-1), None);
    /// ```
    #[must_use]
    pub const fn from_index(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Recovers a severity from its atomic storage representation.
    ///
    /// Only values previously produced by `severity as u8` are ever stored,
    /// so the saturating arm is unreachable in practice; keeping the
    /// function total avoids a panic path inside emission.
    pub(crate) const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warning,
            _ => Self::Error,
        }
    }
}

/// Returns the canonical name for any integer severity value.
///
/// This is a total function: values in `0..=4` map to the matching
/// [`Severity`] name and everything else maps to the literal `"UNKNOWN"`.
/// There is no error path.
///
/// # Examples
///
/// ```
/// use logging::name_of;
///
/// assert_eq!(name_of(0), "Trace");
/// assert_eq!(name_of(4), "Error");
/// assert_eq!(name_of(5), "UNKNOWN");
/// assert_eq!(name_of(-3), "UNKNOWN");
/// ```
#[must_use]
pub const fn name_of(value: i32) -> &'static str {
    match Severity::from_index(value) {
        Some(severity) => severity.as_str(),
        None => UNKNOWN_NAME,
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "Trace" => Ok(Self::Trace),
            "Debug" => Ok(Self::Debug),
            "Info" => Ok(Self::Info),
            "Warning" => Ok(Self::Warning),
            "Error" => Ok(Self::Error),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_order_by_declaration() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn as_str_returns_canonical_names() {
        assert_eq!(Severity::Trace.as_str(), "Trace");
        assert_eq!(Severity::Debug.as_str(), "Debug");
        assert_eq!(Severity::Info.as_str(), "Info");
        assert_eq!(Severity::Warning.as_str(), "Warning");
        assert_eq!(Severity::Error.as_str(), "Error");
    }

    #[test]
    fn name_of_covers_defined_range() {
        assert_eq!(name_of(0), "Trace");
        assert_eq!(name_of(1), "Debug");
        assert_eq!(name_of(2), "Info");
        assert_eq!(name_of(3), "Warning");
        assert_eq!(name_of(4), "Error");
    }

    #[test]
    fn name_of_is_total_over_integers() {
        assert_eq!(name_of(-1), "UNKNOWN");
        assert_eq!(name_of(5), "UNKNOWN");
        assert_eq!(name_of(i32::MIN), "UNKNOWN");
        assert_eq!(name_of(i32::MAX), "UNKNOWN");
    }

    #[test]
    fn from_index_mirrors_discriminants() {
        for severity in [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert_eq!(Severity::from_index(severity as i32), Some(severity));
        }
        assert_eq!(Severity::from_index(5), None);
        assert_eq!(Severity::from_index(-1), None);
    }

    #[test]
    fn from_raw_round_trips_stored_values() {
        for severity in [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert_eq!(Severity::from_raw(severity as u8), severity);
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Severity::Warning.to_string(), "Warning");
        assert_eq!(format!("{}", Severity::Trace), "Trace");
    }

    #[test]
    fn parse_round_trips_canonical_names() {
        for severity in [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn parse_rejects_unknown_input() {
        assert!("trace".parse::<Severity>().is_err());
        assert!("UNKNOWN".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn parse_error_display_is_stable() {
        let error = "bogus".parse::<Severity>().expect_err("must fail");
        assert_eq!(error.to_string(), "unrecognised log severity");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn severity_serializes_to_variant_name() {
            let json = serde_json::to_string(&Severity::Warning).expect("serialize");
            assert_eq!(json, "\"Warning\"");
        }

        #[test]
        fn severity_round_trips_through_json() {
            for severity in [
                Severity::Trace,
                Severity::Debug,
                Severity::Info,
                Severity::Warning,
                Severity::Error,
            ] {
                let json = serde_json::to_string(&severity).expect("serialize");
                let back: Severity = serde_json::from_str(&json).expect("deserialize");
                assert_eq!(back, severity);
            }
        }
    }
}
