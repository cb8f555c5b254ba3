//! Front-end independent view model.

use crate::{
    config::FALLBACK_FONT_FAMILY,
    record::FontRecord,
    state::{BrowseState, Session},
};

/// Heading of the error screen.
pub const ERROR_HEADING: &str = "Sorry!";

/// Label of the button that starts a fetch.
pub const FETCH_LABEL: &str = "Fetch fonts";

/// Text shown while the capability runs.
pub const LOADING_LABEL: &str = "Loading...";

/// `Found N font.` or `Found N fonts.`
pub fn found_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} font{plural}.")
}

/// CSS `font-family` value that previews `family` with the fallback face.
///
/// Double quotes are stripped so the family can be wrapped in quotes.
pub fn css_font_family(family: &str) -> String {
    format!("\"{}\", {FALLBACK_FONT_FAMILY}", family.replace('"', ""))
}

/// Class applied to the preview, e.g. `bold italic`.
pub fn style_class(style: &str) -> String {
    style.to_lowercase()
}

/// One entry of the font list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontItem<'a> {
    pub font: &'a FontRecord,
    pub font_family: String,
    pub style_class: String,
    pub preview: &'a str,
}

impl<'a> FontItem<'a> {
    pub fn new(font: &'a FontRecord, preview: &'a str) -> Self {
        Self {
            font,
            font_family: css_font_family(&font.family),
            style_class: style_class(&font.style),
            preview,
        }
    }
}

/// What a front end should draw for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Idle,
    Loading,
    Success { label: String, items: Vec<FontItem<'a>> },
    Error { message: String },
}

impl<'a> Screen<'a> {
    pub fn of(session: &'a Session) -> Self {
        match session.state() {
            BrowseState::Idle => Screen::Idle,
            BrowseState::Loading => Screen::Loading,
            BrowseState::Success(catalog) => Screen::Success {
                label: found_label(catalog.shown().len()),
                items: catalog
                    .shown()
                    .iter()
                    .map(|font| FontItem::new(font, session.preview()))
                    .collect(),
            },
            BrowseState::Error(err) => Screen::Error { message: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::BrowseError, state::Event};

    #[test]
    fn test_found_label() {
        assert_eq!(found_label(0), "Found 0 fonts.");
        assert_eq!(found_label(1), "Found 1 font.");
        assert_eq!(found_label(42), "Found 42 fonts.");
    }

    #[test]
    fn test_css_font_family_strips_quotes() {
        assert_eq!(css_font_family("Arial"), "\"Arial\", Tofu");
        assert_eq!(css_font_family("My \"Fancy\" Font"), "\"My Fancy Font\", Tofu");
    }

    #[test]
    fn test_style_class() {
        assert_eq!(style_class("Bold Italic"), "bold italic");
    }

    #[test]
    fn test_screen_success() {
        let fonts = vec![
            FontRecord::new("Arial", "Arial", "ArialMT", "Regular"),
            FontRecord::new("Verdana", "Verdana", "Verdana", "Regular"),
        ];
        let session = Session::new()
            .apply(Event::FetchRequested)
            .apply(Event::Resolved(fonts))
            .apply(Event::FilterSubmitted("ARIAL".into()))
            .apply(Event::PreviewSubmitted("Test".into()));

        let Screen::Success { label, items } = Screen::of(&session) else {
            panic!("expected success screen");
        };
        assert_eq!(label, "Found 1 font.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].font.family, "Arial");
        assert_eq!(items[0].preview, "Test");
        assert_eq!(items[0].style_class, "regular");
    }

    #[test]
    fn test_screen_error_message() {
        let session =
            Session::new().apply(Event::FetchRequested).apply(Event::Resolved(Vec::new()));
        assert_eq!(
            Screen::of(&session),
            Screen::Error { message: BrowseError::NoFontsOrDenied.to_string() }
        );
        assert_eq!(Screen::of(&Session::new()), Screen::Idle);
    }
}
