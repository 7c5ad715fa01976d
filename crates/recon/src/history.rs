use crate::model::Identity;

/// Roster in speech-history order: most recent speech first, never-spoken
/// last, input order kept among equals.
pub fn history(identities: &[Identity]) -> Vec<Identity> {
    let mut sorted = identities.to_vec();
    sorted.sort_by(|a, b| match (a.last_speech_date, b.last_speech_date) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted
}
