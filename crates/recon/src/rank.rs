//! Speaker candidate ranking.
//!
//! Eligible: members whose last speech is more than `threshold_days` ago, or
//! who have never spoken. Order:
//! 1. members with an opportunity (a level at most one unit from completion)
//! 2. among those, higher completion percentage first
//! 3. everything else by days since last speech, longest first, never-spoken on top

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use ordered_float::OrderedFloat;

use crate::classify::best_opportunity;
use crate::model::{CandidateRecord, Identity, PathProgress};
use crate::normalize::normalize;

/// Four weeks.
pub const DEFAULT_THRESHOLD_DAYS: u32 = 28;

const SECONDS_PER_DAY: i64 = 86_400;

/// Calendar days between `now` and midnight of `date`, absolute, rounded up.
pub fn days_between(now: NaiveDateTime, date: NaiveDate) -> u32 {
    let secs = (now - date.and_time(chrono::NaiveTime::MIN)).num_seconds().abs();
    let days = (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Rank roster members as speaker candidates. One record per eligible identity.
pub fn rank(
    identities: &[Identity],
    progress: &[PathProgress],
    now: NaiveDateTime,
    threshold_days: u32,
) -> Vec<CandidateRecord> {
    let mut paths_by_key: BTreeMap<String, Vec<&PathProgress>> = BTreeMap::new();
    for p in progress {
        paths_by_key.entry(normalize(&p.identity_key)).or_default().push(p);
    }

    let mut candidates: Vec<CandidateRecord> = identities
        .iter()
        .filter_map(|identity| {
            let days = identity.last_speech_date.map(|d| days_between(now, d));
            if days.is_some_and(|d| d <= threshold_days) {
                return None;
            }

            let opportunity = paths_by_key
                .get(&normalize(&identity.display_name))
                .and_then(|paths| best_opportunity(paths.iter().copied()));

            Some(CandidateRecord {
                identity: identity.clone(),
                days_since_last_speech: days,
                opportunity,
            })
        })
        .collect();

    candidates.sort_by(compare_candidates);

    log::debug!(
        "{} of {} members eligible (threshold {threshold_days} days), {} with opportunities",
        candidates.len(),
        identities.len(),
        candidates.iter().filter(|c| c.opportunity.is_some()).count()
    );

    candidates
}

fn compare_candidates(a: &CandidateRecord, b: &CandidateRecord) -> Ordering {
    match (&a.opportunity, &b.opportunity) {
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (Some(oa), Some(ob)) => {
            let by_pct = OrderedFloat(ob.percentage).cmp(&OrderedFloat(oa.percentage));
            if by_pct != Ordering::Equal {
                return by_pct;
            }
        }
        (None, None) => {}
    }

    // Never spoken sorts above any finite count
    let recency = |c: &CandidateRecord| c.days_since_last_speech.map_or(u64::MAX, u64::from);
    recency(b).cmp(&recency(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LevelStatus;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        now().date() - chrono::Days::new(n)
    }

    fn member(name: &str, days: Option<u64>) -> Identity {
        match days {
            Some(n) => Identity::new(name).with_last_speech(days_ago(n)),
            None => Identity::new(name),
        }
    }

    fn progress(name: &str, level1: LevelStatus) -> PathProgress {
        PathProgress {
            identity_key: name.into(),
            path_label: "Presentation Mastery".into(),
            levels: [
                level1,
                LevelStatus::NotApplicable,
                LevelStatus::NotApplicable,
                LevelStatus::NotApplicable,
                LevelStatus::NotApplicable,
            ],
        }
    }

    fn names(c: &[CandidateRecord]) -> Vec<&str> {
        c.iter().map(|r| r.identity.display_name.as_str()).collect()
    }

    #[test]
    fn days_between_rounds_up() {
        let at_noon = now() + chrono::Duration::hours(12);
        assert_eq!(days_between(now(), days_ago(40)), 40);
        assert_eq!(days_between(at_noon, days_ago(40)), 41);
        assert_eq!(days_between(now(), now().date()), 0);
        assert_eq!(days_between(now(), now().date() + chrono::Days::new(3)), 3);
    }

    #[test]
    fn threshold_is_exclusive() {
        let roster = vec![member("At", Some(28)), member("Past", Some(29)), member("Recent", Some(3))];
        let out = rank(&roster, &[], now(), DEFAULT_THRESHOLD_DAYS);
        assert_eq!(names(&out), vec!["Past"]);
        assert_eq!(out[0].days_since_last_speech, Some(29));
    }

    #[test]
    fn opportunity_ordering() {
        let roster = vec![member("A", Some(60)), member("B", Some(200)), member("C", Some(45))];
        let paths = vec![
            progress("A", LevelStatus::InProgress { completed: 9, total: 10 }),
            progress("C", LevelStatus::InProgress { completed: 19, total: 20 }),
        ];
        let out = rank(&roster, &paths, now(), DEFAULT_THRESHOLD_DAYS);
        assert_eq!(names(&out), vec!["C", "A", "B"]);
        assert!(out[2].opportunity.is_none());
    }

    #[test]
    fn never_spoken_on_top_of_plain_candidates() {
        let roster = vec![member("Old", Some(300)), member("Never", None), member("Older", Some(400))];
        let out = rank(&roster, &[], now(), DEFAULT_THRESHOLD_DAYS);
        assert_eq!(names(&out), vec!["Never", "Older", "Old"]);
        assert_eq!(out[0].days_since_last_speech, None);
    }

    #[test]
    fn equal_percentage_falls_back_to_recency() {
        let roster = vec![member("Short", Some(40)), member("Long", Some(90))];
        let paths = vec![
            progress("Short", LevelStatus::InProgress { completed: 3, total: 4 }),
            progress("Long", LevelStatus::InProgress { completed: 3, total: 4 }),
        ];
        let out = rank(&roster, &paths, now(), DEFAULT_THRESHOLD_DAYS);
        assert_eq!(names(&out), vec!["Long", "Short"]);
    }

    #[test]
    fn progress_joined_by_normalized_name() {
        let roster = vec![member("Jane Doe", None)];
        let paths = vec![progress("Doe, Jane", LevelStatus::InProgress { completed: 1, total: 2 })];
        let out = rank(&roster, &paths, now(), DEFAULT_THRESHOLD_DAYS);
        assert_eq!(out[0].opportunity.as_ref().unwrap().total_units, 2);
    }

    #[test]
    fn best_level_reported_once() {
        let roster = vec![member("Jane Doe", None)];
        let paths = vec![
            progress("Jane Doe", LevelStatus::InProgress { completed: 1, total: 2 }),
            progress("Jane Doe", LevelStatus::InProgress { completed: 4, total: 5 }),
        ];
        let out = rank(&roster, &paths, now(), DEFAULT_THRESHOLD_DAYS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].opportunity.as_ref().unwrap().completed_units, 4);
    }
}
