//! Name key normalization: the join key between roster and agenda names.

/// Canonical lookup key for a display name.
///
/// - Cut at the first `(` or `;` ("Ryan Comer (Ghoulish)", "Ryan Comer; Sandy")
/// - Trim
/// - Exactly one comma means "Last, First" and is reordered to "first last"
/// - Lower-case
///
/// Total and a fixed point: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let cut = raw.find(['(', ';']).map_or(raw, |i| &raw[..i]);
    let clean = cut.trim();

    let mut parts = clean.split(',');
    let reordered = match (parts.next(), parts.next(), parts.next()) {
        (Some(last), Some(first), None) => {
            format!("{} {}", first.trim(), last.trim()).trim().to_string()
        }
        _ => clean.to_string(),
    };

    reordered.to_lowercase()
}
