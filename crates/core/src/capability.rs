//! Platform capabilities the browser depends on but does not implement.

use crate::{error::Result, record::FontRecord};

/// Status reported by the permission capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

impl PermissionState {
    /// Parse the status strings used by the Permissions API.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "granted" => Some(Self::Granted),
            "prompt" => Some(Self::Prompt),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

/// Enumerates locally installed fonts.
///
/// Must only be invoked in response to a user action. Returns an empty list
/// when the user refuses access and [`SourceError::Unsupported`] when the
/// platform has no such capability.
///
/// [`SourceError::Unsupported`]: crate::SourceError::Unsupported
#[allow(async_fn_in_trait)]
pub trait FontSource {
    async fn query_local_fonts(&self) -> Result<Vec<FontRecord>>;
}

/// Reads the status of a named permission.
///
/// `None` means the status could not be determined.
#[allow(async_fn_in_trait)]
pub trait PermissionQuery {
    async fn query(&self, name: &str) -> Option<PermissionState>;
}

/// Best-effort clipboard writer. Failures are swallowed by implementations.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

impl<T: FontSource> FontSource for &T {
    async fn query_local_fonts(&self) -> Result<Vec<FontRecord>> {
        (**self).query_local_fonts().await
    }
}

impl<T: PermissionQuery> PermissionQuery for &T {
    async fn query(&self, name: &str) -> Option<PermissionState> {
        (**self).query(name).await
    }
}

impl<T: Clipboard> Clipboard for &T {
    fn write_text(&self, text: &str) {
        (**self).write_text(text)
    }
}
