//! Fetch driver and the capability-owning browser.

use std::mem::take;

use log::{info, warn};

use crate::{
    capability::{Clipboard, FontSource, PermissionQuery},
    config::LOCAL_FONTS_PERMISSION,
    error::SourceError,
    record::FontRecord,
    state::{BrowseState, Event, Session},
};

/// Run the enumeration capability and turn its outcome into an event.
///
/// This is the only suspend point of a fetch. On failure the permission
/// capability is consulted so denial can be told apart from other errors.
/// The caller is expected to have applied [`Event::FetchRequested`] already.
pub async fn resolve_fetch<S, P>(source: &S, permissions: &P) -> Event
where
    S: FontSource,
    P: PermissionQuery,
{
    match source.query_local_fonts().await {
        Ok(fonts) => {
            info!("Font enumeration returned {} fonts", fonts.len());
            Event::Resolved(fonts)
        }
        Err(SourceError::Unsupported) => {
            warn!("Font enumeration is not supported");
            Event::Unsupported
        }
        Err(SourceError::Failed(reason)) => {
            warn!("Font enumeration failed: {reason}");
            let status = permissions.query(LOCAL_FONTS_PERMISSION).await;
            info!("Permission '{LOCAL_FONTS_PERMISSION}' is {status:?}");
            Event::Failed(status)
        }
    }
}

/// A browse session together with the capabilities that drive it.
pub struct FontBrowser<S, P, C> {
    session: Session,
    source: S,
    permissions: P,
    clipboard: C,
}

impl<S, P, C> FontBrowser<S, P, C>
where
    S: FontSource,
    P: PermissionQuery,
    C: Clipboard,
{
    pub fn new(source: S, permissions: P, clipboard: C) -> Self {
        Self { session: Session::new(), source, permissions, clipboard }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &BrowseState {
        self.session.state()
    }

    /// Feed one event through the state machine.
    pub fn dispatch(&mut self, event: Event) {
        self.session = take(&mut self.session).apply(event);
    }

    /// Request fonts and wait for the outcome.
    ///
    /// Does nothing unless the browser is idle.
    pub async fn fetch(&mut self) {
        self.dispatch(Event::FetchRequested);
        if *self.session.state() != BrowseState::Loading {
            return;
        }
        let event = resolve_fetch(&self.source, &self.permissions).await;
        self.dispatch(event);
    }

    pub fn submit_filter(&mut self, filter: impl Into<String>) {
        self.dispatch(Event::FilterSubmitted(filter.into()));
    }

    pub fn submit_preview(&mut self, text: impl Into<String>) {
        self.dispatch(Event::PreviewSubmitted(text.into()));
    }

    /// Put the font's family name on the clipboard.
    pub fn copy_family(&self, font: &FontRecord) {
        self.clipboard.write_text(&font.family);
    }
}
