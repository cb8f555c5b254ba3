//! Plain-text rendering of a browse session.

use std::fmt;

use availablefonts_core::{
    Screen, Session,
    config::{DESCRIPTION, TITLE},
    view::{ERROR_HEADING, FETCH_LABEL, LOADING_LABEL},
};

/// Displays a session the way the terminal shows it.
pub struct View<'a>(pub &'a Session);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{DESCRIPTION}")?;
        writeln!(f)?;

        match Screen::of(self.0) {
            Screen::Idle => writeln!(f, "[ {FETCH_LABEL} ]"),
            Screen::Loading => writeln!(f, "{LOADING_LABEL}"),
            Screen::Error { message } => {
                writeln!(f, "{ERROR_HEADING}")?;
                writeln!(f, "{message}")
            }
            Screen::Success { label, items } => {
                writeln!(f, "{label}")?;
                let width = items.len().to_string().len();
                for (index, item) in items.iter().enumerate() {
                    writeln!(
                        f,
                        "{:>width$}. {}  {}  ({})",
                        index + 1,
                        item.font.family,
                        item.font.style,
                        item.font.postscript_name,
                    )?;
                    writeln!(f, "{:>width$}  {}", "", item.preview)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use availablefonts_core::{Event, FontRecord};

    use super::*;

    fn lines(session: &Session) -> Vec<String> {
        View(session).to_string().lines().skip(3).map(str::to_string).collect()
    }

    #[test]
    fn test_render_idle() {
        assert_eq!(lines(&Session::new()), ["[ Fetch fonts ]"]);
    }

    #[test]
    fn test_render_error() {
        let session =
            Session::new().apply(Event::FetchRequested).apply(Event::Resolved(Vec::new()));
        assert_eq!(
            lines(&session),
            ["Sorry!", "No fonts were found. or you denied access to local fonts."]
        );
    }

    #[test]
    fn test_render_success() {
        let session = Session::new()
            .apply(Event::FetchRequested)
            .apply(Event::Resolved(vec![FontRecord::new("Arial", "Arial", "ArialMT", "Regular")]))
            .apply(Event::PreviewSubmitted("Test".into()));
        assert_eq!(lines(&session), ["Found 1 font.", "1. Arial  Regular  (ArialMT)", "   Test"]);
    }
}
