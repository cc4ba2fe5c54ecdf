//! Query-on-edit handling.
//!
//! Every edit re-queries the dictionary; empty or whitespace-only text
//! clears the list without a dictionary call. Lookups are synchronous by
//! default — the dictionary is an in-memory structure — but a host that
//! dispatches them off-thread can opt into deferred mode, where stale
//! results (an older edit finishing after a newer one) are dropped on
//! receipt.

use super::types::{EventResponse, QueryRequest, ResultsAction};
use super::{LookupSession, Phase};
use crate::steno::StrokeSequence;

impl LookupSession {
    pub(super) fn query_edited(&mut self, text: &str) -> EventResponse {
        let trimmed = text.trim();
        // Every edit bumps the counter, including edits to empty, so an
        // in-flight lookup for older text is always stale afterwards.
        self.query_seq += 1;

        if trimmed.is_empty() {
            return EventResponse::with_results(ResultsAction::Clear);
        }

        if self.defer_queries {
            let mut resp = EventResponse::none();
            resp.query_request = Some(QueryRequest {
                text: trimmed.to_string(),
                seq: self.query_seq,
            });
            return resp;
        }

        let results = self.dictionary.reverse_lookup(trimmed);
        EventResponse::with_results(render_results(&results))
    }

    /// Deliver results for a deferred query.
    ///
    /// Returns `None` when the results are stale — the text changed since
    /// the request was issued, or the session closed in the meantime.
    /// Latest edit wins: a result for an older query string never
    /// overwrites a newer one.
    pub fn receive_results(&mut self, seq: u64, results: &[StrokeSequence]) -> Option<ResultsAction> {
        if !matches!(self.phase, Phase::Active(_)) || seq != self.query_seq {
            return None;
        }
        Some(render_results(results))
    }
}

fn render_results(results: &[StrokeSequence]) -> ResultsAction {
    if results.is_empty() {
        ResultsAction::ShowNoEntries
    } else {
        ResultsAction::Show(results.iter().map(ToString::to_string).collect())
    }
}
