use std::collections::BTreeMap;

use crate::model::{Mention, MentionGroup};
use crate::normalize::normalize;
use crate::overrides::OverrideMap;

/// Group mentions by resolved key (override-aware), keeping every date and
/// the first raw name seen. Mentions whose name or resolved key is empty are
/// dropped. BTreeMap keeps the output independent of input order.
pub fn group_mentions(mentions: &[Mention], overrides: &OverrideMap) -> BTreeMap<String, MentionGroup> {
    let mut groups: BTreeMap<String, MentionGroup> = BTreeMap::new();

    for mention in mentions {
        let key = normalize(&mention.raw_name);
        if key.is_empty() {
            continue;
        }
        let resolved = overrides.resolve(&key);
        if resolved.is_empty() {
            log::debug!("override for '{key}' resolves to an empty key; dropping mention");
            continue;
        }

        groups
            .entry(resolved.clone())
            .or_insert_with(|| MentionGroup {
                key: resolved,
                original_name: mention.raw_name.trim().to_string(),
                dates: Vec::new(),
            })
            .dates
            .push(mention.occurs_on);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn m(name: &str, date: &str) -> Mention {
        Mention::new(name, NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap())
    }

    #[test]
    fn same_person_many_dates() {
        let mentions = vec![
            m("Doe, Jane", "2026-01-15"),
            m("Jane Doe", "2026-02-12"),
            m("Jane Doe (Evaluator)", "2026-03-05"),
        ];
        let groups = group_mentions(&mentions, &OverrideMap::new());
        assert_eq!(groups.len(), 1);
        let g = &groups["jane doe"];
        assert_eq!(g.dates.len(), 3);
        assert_eq!(g.original_name, "Doe, Jane");
        assert_eq!(g.most_recent(), NaiveDate::from_ymd_opt(2026, 3, 5));
    }

    #[test]
    fn empty_names_dropped() {
        let mentions = vec![m("", "2026-01-15"), m("  ", "2026-01-15"), m("(TBD)", "2026-01-15")];
        assert!(group_mentions(&mentions, &OverrideMap::new()).is_empty());
    }

    #[test]
    fn override_redirects_group() {
        let mentions = vec![m("J. Doe", "2026-01-15"), m("Jane Doe", "2026-02-12")];
        let overrides: OverrideMap = [("j. doe", "Jane Doe")].into_iter().collect();
        let groups = group_mentions(&mentions, &overrides);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["jane doe"].original_name, "J. Doe");
        assert_eq!(groups["jane doe"].dates.len(), 2);
    }
}
