use chrono::NaiveDate;

use crate::model::{Identity, MentionGroup, SpeechSource};

/// Dates derived from one mention group relative to a pivot day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDates {
    /// Latest date on or before the pivot.
    pub last: Option<NaiveDate>,
    /// Earliest date strictly after the pivot.
    pub next: Option<NaiveDate>,
}

/// Split a group's dates into past-or-today and strictly future around `today`.
pub fn split_dates(dates: &[NaiveDate], today: NaiveDate) -> SplitDates {
    SplitDates {
        last: dates.iter().filter(|d| **d <= today).max().copied(),
        next: dates.iter().filter(|d| **d > today).min().copied(),
    }
}

/// What applying a group changed on an identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub last_updated: bool,
    pub next_updated: bool,
}

/// Apply a matched group to an identity.
///
/// `last_speech_date` only moves forward, and `speech_source` records where
/// it came from. `next_speech_date` is replaced whenever the agenda has a
/// future date.
pub fn apply_group(identity: &mut Identity, group: &MentionGroup, today: NaiveDate) -> MatchOutcome {
    let split = split_dates(&group.dates, today);
    let mut outcome = MatchOutcome::default();

    if let Some(last) = split.last {
        if identity.last_speech_date.map_or(true, |current| last > current) {
            identity.last_speech_date = Some(last);
            identity.speech_source = Some(SpeechSource::Agenda);
            outcome.last_updated = true;
        }
    }

    if let Some(next) = split.next {
        identity.next_speech_date = Some(next);
        outcome.next_updated = true;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn group(dates: &[&str]) -> MentionGroup {
        MentionGroup {
            key: "jane doe".into(),
            original_name: "Jane Doe".into(),
            dates: dates.iter().map(|s| d(s)).collect(),
        }
    }

    #[test]
    fn split_around_today() {
        let dates = [d("2026-01-01"), d("2026-02-01"), d("2026-03-01"), d("2026-04-01")];
        let split = split_dates(&dates, d("2026-02-15"));
        assert_eq!(split.last, Some(d("2026-02-01")));
        assert_eq!(split.next, Some(d("2026-03-01")));
    }

    #[test]
    fn today_counts_as_past() {
        let split = split_dates(&[d("2026-02-15")], d("2026-02-15"));
        assert_eq!(split.last, Some(d("2026-02-15")));
        assert_eq!(split.next, None);
    }

    #[test]
    fn older_agenda_date_does_not_regress() {
        let mut id = Identity::new("Jane Doe").with_last_speech(d("2026-02-01"));
        let out = apply_group(&mut id, &group(&["2026-01-10"]), d("2026-02-15"));
        assert!(!out.last_updated);
        assert_eq!(id.last_speech_date, Some(d("2026-02-01")));
        assert_eq!(id.speech_source, Some(SpeechSource::Native));
    }

    #[test]
    fn equal_date_is_not_newer() {
        let mut id = Identity::new("Jane Doe").with_last_speech(d("2026-02-01"));
        let out = apply_group(&mut id, &group(&["2026-02-01"]), d("2026-02-15"));
        assert!(!out.last_updated);
        assert_eq!(id.speech_source, Some(SpeechSource::Native));
    }

    #[test]
    fn newer_agenda_date_wins() {
        let mut id = Identity::new("Jane Doe").with_last_speech(d("2026-01-01"));
        let out = apply_group(&mut id, &group(&["2026-02-01"]), d("2026-02-15"));
        assert!(out.last_updated);
        assert_eq!(id.last_speech_date, Some(d("2026-02-01")));
        assert_eq!(id.speech_source, Some(SpeechSource::Agenda));
    }

    #[test]
    fn future_date_replaces_stale_next() {
        let mut id = Identity::new("Jane Doe");
        id.next_speech_date = Some(d("2026-06-01"));
        let out = apply_group(&mut id, &group(&["2026-03-01", "2026-04-01"]), d("2026-02-15"));
        assert!(out.next_updated);
        assert!(!out.last_updated);
        assert_eq!(id.next_speech_date, Some(d("2026-03-01")));
        assert_eq!(id.last_speech_date, None);
        assert_eq!(id.speech_source, None);
    }

    #[test]
    fn upcoming_only_keeps_native_source() {
        let mut id = Identity::new("Jane Doe").with_last_speech(d("2026-02-01"));
        let out = apply_group(&mut id, &group(&["2026-03-01"]), d("2026-02-15"));
        assert!(out.next_updated);
        assert_eq!(id.last_speech_date, Some(d("2026-02-01")));
        assert_eq!(id.speech_source, Some(SpeechSource::Native));
    }
}
