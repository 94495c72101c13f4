//! Log severity levels and their output mappings.

/// Severity attached to every log call.
///
/// Purely an output tag: nothing in this facility filters on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    /// No particular severity.
    None,
    /// Critical errors, usually requiring immediate attention.
    Error,
    /// Important events that are not necessarily errors.
    Warning,
    /// General system information and status updates.
    Info,
    /// Detailed information for developers during debugging.
    Debug,
    /// Extremely detailed trace logs.
    Verbose,
}

impl LogLevel {
    /// Level name as printed in the serial line prefix.
    ///
    /// `None` falls back to `"LOG"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
            Self::None => "LOG",
        }
    }

    /// Severity handed to a native backend.
    ///
    /// Debug and Verbose collapse to Info on the native path; the
    /// mapping is lossy on purpose.
    pub const fn native_severity(self) -> NativeSeverity {
        match self {
            Self::Error => NativeSeverity::Error,
            Self::Warning => NativeSeverity::Warn,
            _ => NativeSeverity::Info,
        }
    }
}

/// Severity enumeration understood by a platform-native backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NativeSeverity {
    Error,
    Warn,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_level_names() {
        assert_eq!(LogLevel::Error.label(), "ERROR");
        assert_eq!(LogLevel::Warning.label(), "WARNING");
        assert_eq!(LogLevel::Info.label(), "INFO");
        assert_eq!(LogLevel::Debug.label(), "DEBUG");
        assert_eq!(LogLevel::Verbose.label(), "VERBOSE");
        assert_eq!(LogLevel::None.label(), "LOG");
    }

    #[test]
    fn debug_and_verbose_collapse_to_info() {
        assert_eq!(LogLevel::Debug.native_severity(), NativeSeverity::Info);
        assert_eq!(LogLevel::Verbose.native_severity(), NativeSeverity::Info);
        assert_eq!(LogLevel::None.native_severity(), NativeSeverity::Info);
    }

    #[test]
    fn error_and_warning_map_one_to_one() {
        assert_eq!(LogLevel::Error.native_severity(), NativeSeverity::Error);
        assert_eq!(LogLevel::Warning.native_severity(), NativeSeverity::Warn);
        assert_eq!(LogLevel::Info.native_severity(), NativeSeverity::Info);
    }
}
