use crate::matcher::MatchOutcome;
use crate::model::ReconSummary;

/// Accumulates per-identity match outcomes into a [`ReconSummary`].
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    summary: ReconSummary,
}

impl SummaryBuilder {
    pub fn new(identities: usize) -> Self {
        Self {
            summary: ReconSummary {
                identities,
                ..ReconSummary::default()
            },
        }
    }

    pub fn record(&mut self, outcome: MatchOutcome) {
        self.summary.matched_identities += 1;
        if outcome.last_updated {
            self.summary.last_updated += 1;
        }
        if outcome.next_updated {
            self.summary.next_updated += 1;
        }
    }

    pub fn finish(mut self, unmatched: usize) -> ReconSummary {
        self.summary.unmatched = unmatched;
        self.summary
    }
}

impl std::fmt::Display for ReconSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} members: {} matched on the agenda, {} last-speech dates updated, {} upcoming, {} unmatched agenda names",
            self.identities, self.matched_identities, self.last_updated, self.next_updated, self.unmatched,
        )
    }
}
