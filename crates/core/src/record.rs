//! Installed font face descriptions.

/// A snapshot description of one installed font face.
///
/// Records are produced by a [`FontSource`](crate::FontSource) and never
/// modified afterwards. `postscript_name` is unique within one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRecord {
    pub family: String,
    pub full_name: String,
    pub postscript_name: String,
    pub style: String,
}

impl FontRecord {
    pub fn new(
        family: impl Into<String>,
        full_name: impl Into<String>,
        postscript_name: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            full_name: full_name.into(),
            postscript_name: postscript_name.into(),
            style: style.into(),
        }
    }

    /// Case-insensitive substring match against the family name.
    pub fn family_contains(&self, needle: &str) -> bool {
        self.family.to_lowercase().contains(&needle.to_lowercase())
    }
}
