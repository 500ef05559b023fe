//! Error codes for all checker diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1004`) with the first digit
//! indicating the phase. Used for `explain` lookups and documentation.

use std::fmt;

/// Error codes for all checker diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Input errors (fatal)
/// - E1xxx: Call shape errors
/// - E9xxx: Internal errors
///
/// Warnings use W####:
/// - W2xxx: Operator warnings
/// - W3xxx: Coverage warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Input Errors (E0xxx)
    /// Malformed syntax tree
    E0001,
    /// External table schema lookup failed
    E0002,

    // Call Shape Errors (E1xxx)
    /// Field count differs from the reference (header call)
    E1001,
    /// Field name or position differs from the reference (header call)
    E1002,
    /// More fields than the reference
    E1003,
    /// Field name not in the reference
    E1004,
    /// Same field name twice in one call
    E1005,

    // Internal Errors (E9xxx)
    /// Operator call with field names that differ from the built-in signature
    E9001,

    // Operator Warnings (W2xxx)
    /// Unsupported operator
    W2001,

    // Coverage Warnings (W3xxx)
    /// Predicate never received a reference, its calls were not checked
    W3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E9001,
        ErrorCode::W2001,
        ErrorCode::W3001,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E9001 => "E9001",
            ErrorCode::W2001 => "W2001",
            ErrorCode::W3001 => "W3001",
        }
    }

    /// Check if this is a fatal input error (E0xxx range).
    pub fn is_input_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    /// Check if this is a call shape error (E1xxx range).
    pub fn is_call_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W2001 | ErrorCode::W3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1004"` or `"W2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
