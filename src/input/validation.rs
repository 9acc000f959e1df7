use crate::config::COMMIT_TYPES;

/// Exact, case-sensitive membership in [`COMMIT_TYPES`].
pub fn is_valid_type(candidate: &str) -> bool {
    COMMIT_TYPES.contains(&candidate)
}

/// Resolve a 1-based menu index to its commit type.
pub fn type_at_index(index: usize) -> Option<&'static str> {
    index.checked_sub(1).and_then(|i| COMMIT_TYPES.get(i)).copied()
}

/// Menu answer starting with an integer (optional sign, then digits; the
/// rest of the line is ignored). `None` when the answer is not numeric,
/// `Some(None)` when the number is outside the menu.
pub fn parse_selection(input: &str) -> Option<Option<&'static str>> {
    let unsigned = input.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(input);
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let sign_len = input.len() - unsigned.len();
    let selection = input[..sign_len + digits_len]
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(type_at_index);
    Some(selection)
}

/// Closest allowed type to `input`, used only to hint the user.
pub fn suggest_commit_type(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }
    COMMIT_TYPES
        .iter()
        .min_by_key(|&&valid_type| strsim::levenshtein(&input, valid_type))
        .filter(|&&valid_type| {
            let distance = strsim::levenshtein(&input, valid_type);
            let max_allowed = (valid_type.len() as f32 * 0.6).ceil() as usize;
            distance <= max_allowed
        })
        .copied()
}
