//! Error types for the font browser.

use std::result;

/// Terminal errors of a browse session.
///
/// Every variant is shown to the user as-is; none are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BrowseError {
    #[error("queryLocalFonts is not available in your browser.")]
    CapabilityUnsupported,

    #[error("No fonts were found. or you denied access to local fonts.")]
    NoFontsOrDenied,

    #[error("You denied access to local fonts.")]
    PermissionDenied,

    #[error("An unknown error occurred.")]
    Unknown,
}

/// Failure of the font enumeration capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("font enumeration is not supported here")]
    Unsupported,

    #[error("font enumeration failed: {0}")]
    Failed(String),
}

pub type Result<T> = result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_error_messages() {
        assert_eq!(
            BrowseError::CapabilityUnsupported.to_string(),
            "queryLocalFonts is not available in your browser."
        );
        assert_eq!(
            BrowseError::NoFontsOrDenied.to_string(),
            "No fonts were found. or you denied access to local fonts."
        );
        assert_eq!(BrowseError::PermissionDenied.to_string(), "You denied access to local fonts.");
        assert_eq!(BrowseError::Unknown.to_string(), "An unknown error occurred.");
    }
}
