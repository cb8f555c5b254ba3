//! Browse session state machine.
//!
//! A [`Session`] is a plain value. [`Session::apply`] maps it and an
//! [`Event`] to the next session without touching any capability or UI, so
//! front ends only need to feed events in and render what comes out.

use log::{debug, warn};

use crate::{
    capability::PermissionState, config::DEFAULT_PREVIEW_TEXT, error::BrowseError,
    record::FontRecord,
};

/// Fonts obtained by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    all: Vec<FontRecord>,
    shown: Vec<FontRecord>,
}

impl Catalog {
    fn new(fonts: Vec<FontRecord>) -> Self {
        Self { shown: fonts.clone(), all: fonts }
    }

    /// Every font from the fetch, in capability order.
    pub fn all(&self) -> &[FontRecord] {
        &self.all
    }

    /// The working copy: fonts matching the last submitted filter.
    pub fn shown(&self) -> &[FontRecord] {
        &self.shown
    }

    /// Recompute the working copy from the full set.
    fn filtered(self, filter: &str) -> Self {
        let shown = if filter.is_empty() {
            self.all.clone()
        } else {
            self.all.iter().filter(|font| font.family_contains(filter)).cloned().collect()
        };
        Self { all: self.all, shown }
    }
}

/// Which screen the browser is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowseState {
    #[default]
    Idle,
    Loading,
    Success(Catalog),
    Error(BrowseError),
}

impl BrowseState {
    pub fn name(&self) -> &'static str {
        match self {
            BrowseState::Idle => "idle",
            BrowseState::Loading => "loading",
            BrowseState::Success(_) => "success",
            BrowseState::Error(_) => "error",
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            BrowseState::Success(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<BrowseError> {
        match self {
            BrowseState::Error(err) => Some(*err),
            _ => None,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user pressed "Fetch fonts".
    FetchRequested,
    /// The enumeration capability does not exist.
    Unsupported,
    /// The enumeration capability returned these fonts.
    Resolved(Vec<FontRecord>),
    /// The enumeration capability failed. Carries the permission status, or
    /// `None` when the status itself could not be read.
    Failed(Option<PermissionState>),
    /// The search form was submitted.
    FilterSubmitted(String),
    /// The preview form was submitted.
    PreviewSubmitted(String),
}

/// Everything the browser remembers during one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: BrowseState,
    preview: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { state: BrowseState::Idle, preview: DEFAULT_PREVIEW_TEXT.to_string() }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Text rendered in each font. Changes only on a submitted preview.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Compute the session that follows `event`.
    ///
    /// Events that have no transition from the current state return the
    /// session unchanged. Error has no outgoing transitions.
    pub fn apply(self, event: Event) -> Self {
        let Self { state, preview } = self;
        let from = state.name();

        let (state, preview) = match (state, event) {
            (BrowseState::Idle, Event::FetchRequested) => (BrowseState::Loading, preview),
            (BrowseState::Loading, Event::Unsupported) => {
                (BrowseState::Error(BrowseError::CapabilityUnsupported), preview)
            }
            (BrowseState::Loading, Event::Resolved(fonts)) if fonts.is_empty() => {
                (BrowseState::Error(BrowseError::NoFontsOrDenied), preview)
            }
            (BrowseState::Loading, Event::Resolved(fonts)) => {
                (BrowseState::Success(Catalog::new(fonts)), preview)
            }
            (BrowseState::Loading, Event::Failed(permission)) => {
                let err = match permission {
                    Some(PermissionState::Denied) => BrowseError::PermissionDenied,
                    _ => BrowseError::Unknown,
                };
                (BrowseState::Error(err), preview)
            }
            (BrowseState::Success(catalog), Event::FilterSubmitted(filter)) => {
                (BrowseState::Success(catalog.filtered(&filter)), preview)
            }
            (BrowseState::Success(catalog), Event::PreviewSubmitted(text)) => {
                (BrowseState::Success(catalog), text)
            }
            (state, event) => {
                warn!("Ignoring {event:?} in state {from}");
                (state, preview)
            }
        };

        debug!("{from} -> {}", state.name());
        Self { state, preview }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(family: &str, style: &str) -> FontRecord {
        let postscript = format!("{}-{style}", family.replace(' ', ""));
        FontRecord::new(family, format!("{family} {style}"), postscript, style)
    }

    fn loaded(fonts: Vec<FontRecord>) -> Session {
        Session::new().apply(Event::FetchRequested).apply(Event::Resolved(fonts))
    }

    fn families(session: &Session) -> Vec<&str> {
        session
            .state()
            .catalog()
            .unwrap()
            .shown()
            .iter()
            .map(|f| f.family.as_str())
            .collect()
    }

    #[test]
    fn test_new_session_is_idle_with_default_preview() {
        let session = Session::new();
        assert_eq!(session.state(), &BrowseState::Idle);
        assert_eq!(session.preview(), DEFAULT_PREVIEW_TEXT);
    }

    #[test]
    fn test_fetch_requested_enters_loading() {
        let session = Session::new().apply(Event::FetchRequested);
        assert_eq!(session.state(), &BrowseState::Loading);
    }

    #[test]
    fn test_unsupported_is_error() {
        let session = Session::new().apply(Event::FetchRequested).apply(Event::Unsupported);
        assert_eq!(session.state().error(), Some(BrowseError::CapabilityUnsupported));
    }

    #[test]
    fn test_empty_result_is_error() {
        let session = loaded(Vec::new());
        assert_eq!(session.state().error(), Some(BrowseError::NoFontsOrDenied));
    }

    #[test]
    fn test_resolved_keeps_every_font() {
        let session = loaded(vec![font("Arial", "Regular"), font("Verdana", "Bold")]);
        let catalog = session.state().catalog().unwrap();
        assert_eq!(catalog.all().len(), 2);
        assert_eq!(catalog.shown(), catalog.all());
    }

    #[test]
    fn test_failure_with_denied_permission() {
        let session = Session::new()
            .apply(Event::FetchRequested)
            .apply(Event::Failed(Some(PermissionState::Denied)));
        assert_eq!(session.state().error(), Some(BrowseError::PermissionDenied));
    }

    #[test]
    fn test_failure_with_other_permission_is_unknown() {
        for permission in [Some(PermissionState::Granted), Some(PermissionState::Prompt), None] {
            let session =
                Session::new().apply(Event::FetchRequested).apply(Event::Failed(permission));
            assert_eq!(session.state().error(), Some(BrowseError::Unknown));
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let session = loaded(vec![font("Arial", "Regular"), font("Verdana", "Regular")])
            .apply(Event::FilterSubmitted("aria".into()));
        assert_eq!(families(&session), ["Arial"]);
        assert_eq!(session.state().catalog().unwrap().all().len(), 2);
    }

    #[test]
    fn test_filters_do_not_compound() {
        let session = loaded(vec![font("Arial", "Regular"), font("Verdana", "Regular")])
            .apply(Event::FilterSubmitted("arial".into()))
            .apply(Event::FilterSubmitted("VER".into()));
        assert_eq!(families(&session), ["Verdana"]);
    }

    #[test]
    fn test_empty_filter_restores_full_set() {
        let session = loaded(vec![font("Arial", "Regular"), font("Verdana", "Regular")])
            .apply(Event::FilterSubmitted("zzz".into()));
        assert!(families(&session).is_empty());

        let session = session.apply(Event::FilterSubmitted(String::new()));
        assert_eq!(families(&session), ["Arial", "Verdana"]);
    }

    #[test]
    fn test_preview_leaves_fonts_untouched() {
        let session = loaded(vec![font("Arial", "Regular"), font("Verdana", "Regular")])
            .apply(Event::FilterSubmitted("verd".into()));
        let before = session.state().clone();

        let session = session.apply(Event::PreviewSubmitted("Test".into()));
        assert_eq!(session.preview(), "Test");
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_error_is_terminal() {
        let session = loaded(Vec::new());
        let events = [
            Event::FetchRequested,
            Event::Resolved(vec![font("Arial", "Regular")]),
            Event::FilterSubmitted("a".into()),
            Event::PreviewSubmitted("x".into()),
        ];
        for event in events {
            let next = session.clone().apply(event);
            assert_eq!(next, session);
        }
    }

    #[test]
    fn test_out_of_place_events_are_ignored() {
        let idle = Session::new();
        assert_eq!(idle.clone().apply(Event::Resolved(vec![font("Arial", "Regular")])), idle);
        assert_eq!(idle.clone().apply(Event::PreviewSubmitted("x".into())), idle);

        let loading = idle.apply(Event::FetchRequested);
        assert_eq!(loading.clone().apply(Event::FetchRequested), loading);
        assert_eq!(loading.clone().apply(Event::FilterSubmitted("a".into())), loading);

        let success = loaded(vec![font("Arial", "Regular")]);
        assert_eq!(success.clone().apply(Event::FetchRequested), success);
        assert_eq!(success.clone().apply(Event::Unsupported), success);
    }
}
