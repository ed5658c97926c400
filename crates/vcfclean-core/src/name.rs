/// Normalize a full name for duplicate matching: trim, collapse internal
/// whitespace runs to one space, lowercase. Returns `None` when nothing
/// usable remains.
pub fn normalize_name_for_match(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            if prev_space {
                continue;
            }
            prev_space = true;
            out.push(' ');
        } else {
            prev_space = false;
            for lowered in ch.to_lowercase() {
                out.push(lowered);
            }
        }
    }

    Some(out)
}
