use dictionary::{DictionaryError, Entry, Report};

/// Where the current search stands. Exactly one panel (placeholder,
/// spinner, result, error) follows from this at any time.
#[derive(Debug, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Fetching,
    Ready(Entry),
    Failed(Report),
}

/// Owns the display state across searches. Each search gets a
/// monotonically increasing ticket; a result is applied only if its
/// ticket is still the latest, so a slow response from an earlier
/// search can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: u64,
    state: SearchState,
}

#[derive(Debug, Clone, Copy)]
pub struct Ticket(u64);

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new search, superseding any still in flight.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = SearchState::Fetching;
        Ticket(self.latest)
    }

    /// Applies a finished search. Returns false when the ticket was
    /// superseded, in which case the state is left untouched.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        word: &str,
        outcome: Result<Entry, DictionaryError>,
    ) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(word, ticket = ticket.0, latest = self.latest, "dropping stale result");
            return false;
        }
        self.state = match outcome {
            Ok(entry) => SearchState::Ready(entry),
            Err(error) => SearchState::Failed(error.report(word)),
        };
        true
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictionary::License;

    fn entry(word: &str) -> Entry {
        Entry {
            word: word.to_owned(),
            phonetic: None,
            phonetics: Vec::new(),
            origin: None,
            meanings: Vec::new(),
            license: License::default(),
            source_urls: Vec::new(),
        }
    }

    #[test]
    fn begin_moves_to_fetching() {
        let mut session = SearchSession::new();
        assert!(matches!(session.state(), SearchState::Idle));
        session.begin();
        assert!(matches!(session.state(), SearchState::Fetching));
    }

    #[test]
    fn latest_result_is_applied() {
        let mut session = SearchSession::new();
        let ticket = session.begin();
        assert!(session.apply(ticket, "cat", Ok(entry("cat"))));
        match session.state() {
            SearchState::Ready(entry) => assert_eq!(entry.word, "cat"),
            other => panic!("expected a result, got {other:?}"),
        }
    }

    #[test]
    fn superseded_result_is_dropped() {
        let mut session = SearchSession::new();
        let first = session.begin();
        let second = session.begin();
        assert!(session.apply(second, "dog", Ok(entry("dog"))));
        // the earlier search resolves late; its result must not win
        assert!(!session.apply(first, "cat", Ok(entry("cat"))));
        match session.state() {
            SearchState::Ready(entry) => assert_eq!(entry.word, "dog"),
            other => panic!("expected the newer result, got {other:?}"),
        }
    }

    #[test]
    fn failures_become_reports() {
        let mut session = SearchSession::new();
        let ticket = session.begin();
        assert!(session.apply(ticket, "zzyzx", Err(DictionaryError::WordNotFound)));
        match session.state() {
            SearchState::Failed(report) => assert!(report.message.contains("zzyzx")),
            other => panic!("expected a failure, got {other:?}"),
        }
    }
}
