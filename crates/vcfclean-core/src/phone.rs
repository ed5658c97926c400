/// Normalize a phone number into a key for duplicate removal.
///
/// Formatting (whitespace, punctuation) is dropped and a leading `+` is
/// kept. An extension (`x`, `#`, `;` or `,` after the base number) stays
/// part of the key, appended after an `x`, so `555-1111 x11` and
/// `555-1111 x22` never collapse into one entry. Returns `None` when the
/// value has no base digits to compare on.
pub fn normalize_phone_for_match(value: &str) -> Option<String> {
    let mut base = String::new();
    let mut extension = String::new();
    let mut in_extension = false;

    if value.trim_start().starts_with('+') {
        base.push('+');
    }

    for ch in value.chars() {
        if ch.is_ascii_digit() {
            if in_extension {
                extension.push(ch);
            } else {
                base.push(ch);
            }
        } else if matches!(ch, 'x' | 'X' | '#' | ';' | ',') {
            in_extension = true;
        }
    }

    if !base.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }

    if !extension.is_empty() {
        base.push('x');
        base.push_str(&extension);
    }
    Some(base)
}
