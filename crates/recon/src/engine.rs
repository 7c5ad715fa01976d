use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::aggregate::group_mentions;
use crate::evidence::SummaryBuilder;
use crate::matcher::apply_group;
use crate::model::{Identity, Mention, ReconSummary, Reconciliation, UnmatchedEntry};
use crate::normalize::normalize;
use crate::overrides::OverrideMap;

/// Merge agenda mentions into the roster.
///
/// `today` is the past/future pivot (day granularity). Identities with no
/// matching mentions pass through unchanged; roster order is preserved.
/// Two identities normalizing to the same key both receive that key's dates.
pub fn reconcile(
    identities: &[Identity],
    mentions: &[Mention],
    overrides: &OverrideMap,
    today: NaiveDate,
) -> Reconciliation {
    reconcile_with_summary(identities, mentions, overrides, today).0
}

/// [`reconcile`] plus counts of what changed.
pub fn reconcile_with_summary(
    identities: &[Identity],
    mentions: &[Mention],
    overrides: &OverrideMap,
    today: NaiveDate,
) -> (Reconciliation, ReconSummary) {
    let groups = group_mentions(mentions, overrides);
    let mut matched_keys: BTreeSet<&str> = BTreeSet::new();
    let mut summary = SummaryBuilder::new(identities.len());

    let mut merged = identities.to_vec();
    for identity in merged.iter_mut() {
        let key = normalize(&identity.display_name);
        let Some(group) = groups.get(&key) else {
            continue;
        };
        matched_keys.insert(group.key.as_str());
        summary.record(apply_group(identity, group, today));
    }

    let unmatched: Vec<UnmatchedEntry> = groups
        .values()
        .filter(|g| !matched_keys.contains(g.key.as_str()))
        .filter_map(|g| {
            g.most_recent().map(|most_recent_date| UnmatchedEntry {
                key: g.key.clone(),
                original_name: g.original_name.clone(),
                most_recent_date,
            })
        })
        .collect();

    log::debug!(
        "reconciled {} identities against {} mention groups: {} unmatched",
        merged.len(),
        groups.len(),
        unmatched.len()
    );

    let summary = summary.finish(unmatched.len());
    (Reconciliation { merged, unmatched }, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpeechSource;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn last_first_mention_matches_roster() {
        let roster = vec![Identity::new("Jane Doe")];
        let mentions = vec![Mention::new("Doe, Jane", d("2026-09-06"))];
        let out = reconcile(&roster, &mentions, &OverrideMap::new(), d("2026-10-16"));
        assert_eq!(out.merged[0].last_speech_date, Some(d("2026-09-06")));
        assert_eq!(out.merged[0].speech_source, Some(SpeechSource::Agenda));
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn override_resolves_unmatched_name() {
        let roster = vec![Identity::new("Jane Doe")];
        let mentions = vec![Mention::new("J. Doe", d("2026-09-06"))];

        let out = reconcile(&roster, &mentions, &OverrideMap::new(), d("2026-10-16"));
        assert_eq!(out.unmatched.len(), 1);
        assert_eq!(out.unmatched[0].key, "j. doe");
        assert_eq!(out.unmatched[0].original_name, "J. Doe");

        let overrides: OverrideMap = [("j. doe", "Jane Doe")].into_iter().collect();
        let out = reconcile(&roster, &mentions, &overrides, d("2026-10-16"));
        assert!(out.unmatched.is_empty());
        assert_eq!(out.merged[0].last_speech_date, Some(d("2026-09-06")));
    }

    #[test]
    fn override_to_unknown_name_reports_overridden_key() {
        let roster = vec![Identity::new("Jane Doe")];
        let mentions = vec![Mention::new("J. Doe", d("2026-09-06"))];
        let overrides: OverrideMap = [("j. doe", "Janet Dough")].into_iter().collect();
        let out = reconcile(&roster, &mentions, &overrides, d("2026-10-16"));
        assert_eq!(out.unmatched.len(), 1);
        assert_eq!(out.unmatched[0].key, "janet dough");
        assert_eq!(out.unmatched[0].original_name, "J. Doe");
    }

    #[test]
    fn unmatched_reports_most_recent_date() {
        let mentions = vec![
            Mention::new("Guest Speaker", d("2026-03-01")),
            Mention::new("guest speaker", d("2026-11-01")),
            Mention::new("Guest Speaker", d("2026-05-01")),
        ];
        let out = reconcile(&[], &mentions, &OverrideMap::new(), d("2026-10-16"));
        assert_eq!(out.unmatched.len(), 1);
        assert_eq!(out.unmatched[0].most_recent_date, d("2026-11-01"));
        assert_eq!(out.unmatched[0].original_name, "Guest Speaker");
    }

    #[test]
    fn untouched_identities_pass_through() {
        let roster = vec![
            Identity::new("Jane Doe").with_last_speech(d("2026-01-01")),
            Identity::new("Bob Roe"),
        ];
        let out = reconcile(&roster, &[], &OverrideMap::new(), d("2026-10-16"));
        assert_eq!(out.merged, roster);
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn past_and_future_split() {
        let roster = vec![Identity::new("Jane Doe")];
        let mentions = vec![
            Mention::new("Jane Doe", d("2026-08-01")),
            Mention::new("Jane Doe", d("2026-10-16")),
            Mention::new("Jane Doe", d("2026-12-01")),
            Mention::new("Jane Doe", d("2026-11-01")),
        ];
        let out = reconcile(&roster, &mentions, &OverrideMap::new(), d("2026-10-16"));
        assert_eq!(out.merged[0].last_speech_date, Some(d("2026-10-16")));
        assert_eq!(out.merged[0].next_speech_date, Some(d("2026-11-01")));
    }

    #[test]
    fn duplicate_roster_keys_both_updated() {
        // Known ambiguity: no stronger identity key exists, so both get the dates.
        let roster = vec![Identity::new("Jane Doe"), Identity::new("Doe, Jane")];
        let mentions = vec![Mention::new("Jane Doe", d("2026-09-06"))];
        let out = reconcile(&roster, &mentions, &OverrideMap::new(), d("2026-10-16"));
        assert!(out.merged.iter().all(|i| i.last_speech_date == Some(d("2026-09-06"))));
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn summary_counts() {
        let roster = vec![
            Identity::new("Jane Doe"),
            Identity::new("Bob Roe").with_last_speech(d("2026-10-01")),
            Identity::new("Ann Poe"),
        ];
        let mentions = vec![
            Mention::new("Jane Doe", d("2026-09-06")),
            Mention::new("Bob Roe", d("2026-09-01")),
            Mention::new("Bob Roe", d("2026-11-20")),
            Mention::new("Visitor", d("2026-09-01")),
        ];
        let (_, summary) =
            reconcile_with_summary(&roster, &mentions, &OverrideMap::new(), d("2026-10-16"));
        assert_eq!(summary.identities, 3);
        assert_eq!(summary.matched_identities, 2);
        assert_eq!(summary.last_updated, 1);
        assert_eq!(summary.next_updated, 1);
        assert_eq!(summary.unmatched, 1);
    }
}
