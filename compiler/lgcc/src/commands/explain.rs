//! The `explain` command: documentation for diagnostic codes.

use lgc_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Documentation for a code given as text, e.g. `e1004`.
pub fn explain_error(code_str: &str) -> Result<&'static str, CliError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(CliError::Usage(format!(
            "unknown error code: {code_str}\n\n\
             Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit.\n\
             Examples: E0001, E1004, W3001"
        )));
    };

    ErrorDocs::get(code)
        .ok_or_else(|| CliError::Usage(format!("no documentation available for {code}")))
}
