//! Configuration constants shared by every front end.

/// Preview text shown before the user submits their own.
pub const DEFAULT_PREVIEW_TEXT: &str = "Hello! こんにちは！ 你好!";

/// Name passed to the permission capability on the failure path.
pub const LOCAL_FONTS_PERMISSION: &str = "local-fonts";

/// Fallback face appended to every preview's `font-family` list.
pub const FALLBACK_FONT_FAMILY: &str = "Tofu";

/// Page heading.
pub const TITLE: &str = "My available fonts!";

/// Short description under the heading.
pub const DESCRIPTION: &str = "Displays a list of fonts that can be displayed on this browser. \
    Can only use in Chrome 103+ or Edge 103+.";
