//! UI state machines for the main search view and the detail overlay.
//!
//! Each controller owns a single explicit state value that is replaced
//! atomically on every transition; nothing is mutated field-by-field. Both
//! controllers carry a sequence counter: a submission hands out a
//! [`RequestTicket`], and a resolution is applied only while its ticket is
//! still the newest. A response from a superseded request is dropped instead
//! of overwriting newer state.

use tracing::debug;

use crate::model::{MovieDetail, SearchResultItem};

/// Main-view state. Exactly one is active at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// Nothing searched yet, or the last submission was blank.
    Initial,
    /// A search request is in flight.
    Loading,
    /// At least one hit, in the order the service returned them.
    Results(Vec<SearchResultItem>),
    /// The service answered but found nothing.
    NoResults,
    /// The request failed; the user sees a generic message.
    Error,
}

/// How a pending search resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResolution {
    Hits(Vec<SearchResultItem>),
    NoMatch,
    Failed,
}

/// Identifies one issued request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Search controller: the current main-view state plus the newest ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    state: SearchState,
    seq: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: SearchState::Initial,
            seq: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether a search request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    /// Handles a submission.
    ///
    /// A blank query resets the view to `Initial` and issues nothing.
    /// Otherwise the view enters `Loading` and the returned ticket must be
    /// passed back with the request's resolution.
    pub fn submit(&mut self, query: &str) -> Option<RequestTicket> {
        if query.trim().is_empty() {
            self.state = SearchState::Initial;
            return None;
        }
        self.seq += 1;
        self.state = SearchState::Loading;
        Some(RequestTicket(self.seq))
    }

    /// Applies a resolution if its ticket is still the newest.
    ///
    /// Returns whether the resolution was applied. A `Hits` resolution with
    /// an empty list counts as no match.
    pub fn resolve(&mut self, ticket: RequestTicket, resolution: SearchResolution) -> bool {
        if ticket.0 != self.seq {
            debug!(
                ticket = ticket.0,
                newest = self.seq,
                "dropping stale search resolution"
            );
            return false;
        }
        self.state = match resolution {
            SearchResolution::Hits(items) if !items.is_empty() => SearchState::Results(items),
            SearchResolution::Hits(_) | SearchResolution::NoMatch => SearchState::NoResults,
            SearchResolution::Failed => SearchState::Error,
        };
        true
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Sub-state of an open detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Loaded(Box<MovieDetail>),
    Failed,
}

/// Detail overlay state.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Open(DetailPhase),
}

/// How a pending detail request resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailResolution {
    Found(Box<MovieDetail>),
    NotFound,
    Failed,
}

/// Detail controller: overlay state plus the newest ticket.
///
/// Independent of [`SearchSession`]; opening and closing the overlay never
/// touches the main-view state.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSession {
    state: ModalState,
    seq: u64,
}

impl DetailSession {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            seq: 0,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Opens the overlay in the loading phase.
    ///
    /// The returned ticket must be passed back with the detail request's
    /// resolution. Reopening supersedes any request still in flight.
    pub fn open(&mut self) -> RequestTicket {
        self.seq += 1;
        self.state = ModalState::Open(DetailPhase::Loading);
        RequestTicket(self.seq)
    }

    /// Closes the overlay. Any in-flight request's ticket becomes stale, so
    /// a late resolution cannot reopen or mutate the overlay.
    pub fn close(&mut self) {
        self.seq += 1;
        self.state = ModalState::Closed;
    }

    /// Applies a resolution if its ticket is still the newest.
    ///
    /// `NotFound` and `Failed` both land in the failed phase with the
    /// overlay left open for deliberate dismissal.
    pub fn resolve(&mut self, ticket: RequestTicket, resolution: DetailResolution) -> bool {
        if ticket.0 != self.seq {
            debug!(
                ticket = ticket.0,
                newest = self.seq,
                "dropping stale detail resolution"
            );
            return false;
        }
        self.state = match resolution {
            DetailResolution::Found(detail) => ModalState::Open(DetailPhase::Loaded(detail)),
            DetailResolution::NotFound | DetailResolution::Failed => {
                ModalState::Open(DetailPhase::Failed)
            }
        };
        true
    }
}

impl Default for DetailSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str) -> SearchResultItem {
        SearchResultItem {
            title: title.into(),
            year: "1999".into(),
            external_id: id.into(),
            poster_url: None,
        }
    }

    #[test]
    fn starts_initial() {
        assert_eq!(*SearchSession::new().state(), SearchState::Initial);
    }

    #[test]
    fn blank_submission_resets_without_a_ticket() {
        let mut session = SearchSession::new();
        session.submit("matrix").unwrap();
        assert!(session.is_loading());

        assert_eq!(session.submit("   "), None);
        assert_eq!(*session.state(), SearchState::Initial);
    }

    #[test]
    fn hits_enter_results_in_order() {
        let mut session = SearchSession::new();
        let ticket = session.submit("matrix").unwrap();
        let items = vec![item("tt0133093", "The Matrix"), item("tt0234215", "The Matrix Reloaded")];
        assert!(session.resolve(ticket, SearchResolution::Hits(items.clone())));
        assert_eq!(*session.state(), SearchState::Results(items));
    }

    #[test]
    fn no_match_and_empty_hits_enter_no_results() {
        let mut session = SearchSession::new();
        let ticket = session.submit("zzxxqq").unwrap();
        assert!(session.resolve(ticket, SearchResolution::NoMatch));
        assert_eq!(*session.state(), SearchState::NoResults);

        let ticket = session.submit("zzxxqq").unwrap();
        assert!(session.resolve(ticket, SearchResolution::Hits(vec![])));
        assert_eq!(*session.state(), SearchState::NoResults);
    }

    #[test]
    fn failure_enters_error_and_is_recoverable() {
        let mut session = SearchSession::new();
        let ticket = session.submit("matrix").unwrap();
        session.resolve(ticket, SearchResolution::Failed);
        assert_eq!(*session.state(), SearchState::Error);

        let ticket = session.submit("matrix").unwrap();
        session.resolve(ticket, SearchResolution::Hits(vec![item("tt0133093", "The Matrix")]));
        assert!(matches!(session.state(), SearchState::Results(_)));
    }

    #[test]
    fn stale_search_resolution_is_dropped() {
        let mut session = SearchSession::new();
        let first = session.submit("matrix").unwrap();
        let second = session.submit("inception").unwrap();

        assert!(!session.resolve(first, SearchResolution::Hits(vec![item("tt0133093", "The Matrix")])));
        assert!(session.is_loading());

        assert!(session.resolve(second, SearchResolution::Hits(vec![item("tt1375666", "Inception")])));
        match session.state() {
            SearchState::Results(items) => assert_eq!(items[0].title, "Inception"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn modal_opens_loading_and_loads() {
        let mut session = DetailSession::new();
        let ticket = session.open();
        assert_eq!(*session.state(), ModalState::Open(DetailPhase::Loading));

        let detail = Box::new(MovieDetail {
            title: Some("The Matrix".into()),
            ..MovieDetail::default()
        });
        assert!(session.resolve(ticket, DetailResolution::Found(detail.clone())));
        assert_eq!(*session.state(), ModalState::Open(DetailPhase::Loaded(detail)));
    }

    #[test]
    fn not_found_and_failure_keep_overlay_open() {
        let mut session = DetailSession::new();
        let ticket = session.open();
        session.resolve(ticket, DetailResolution::NotFound);
        assert_eq!(*session.state(), ModalState::Open(DetailPhase::Failed));
        assert!(session.is_open());

        let ticket = session.open();
        session.resolve(ticket, DetailResolution::Failed);
        assert_eq!(*session.state(), ModalState::Open(DetailPhase::Failed));
    }

    #[test]
    fn late_resolution_after_close_is_dropped() {
        let mut session = DetailSession::new();
        let ticket = session.open();
        session.close();
        assert_eq!(*session.state(), ModalState::Closed);

        let detail = Box::new(MovieDetail::default());
        assert!(!session.resolve(ticket, DetailResolution::Found(detail)));
        assert_eq!(*session.state(), ModalState::Closed);
    }

    #[test]
    fn reopening_supersedes_the_previous_request() {
        let mut session = DetailSession::new();
        let first = session.open();
        let second = session.open();

        assert!(!session.resolve(first, DetailResolution::Failed));
        assert_eq!(*session.state(), ModalState::Open(DetailPhase::Loading));

        let detail = Box::new(MovieDetail::default());
        assert!(session.resolve(second, DetailResolution::Found(detail)));
        assert!(matches!(
            session.state(),
            ModalState::Open(DetailPhase::Loaded(_))
        ));
    }

    #[test]
    fn modal_lifecycle_leaves_search_state_untouched() {
        let mut search = SearchSession::new();
        let ticket = search.submit("matrix").unwrap();
        search.resolve(
            ticket,
            SearchResolution::Hits(vec![item("tt0133093", "The Matrix")]),
        );
        let before = search.clone();

        let mut modal = DetailSession::new();
        let ticket = modal.open();
        modal.resolve(ticket, DetailResolution::Found(Box::new(MovieDetail::default())));
        modal.close();

        assert_eq!(search, before);
    }
}
