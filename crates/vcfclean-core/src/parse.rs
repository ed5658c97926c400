use crate::card::{Card, Property};
use crate::error::{ParseError, Result};

/// Parse a .vcf document into cards.
///
/// Lines without a colon, or with an empty name, are skipped. Unbalanced
/// `BEGIN:VCARD`/`END:VCARD` markers are an error; everything else is best
/// effort.
pub fn parse_vcf(data: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    let mut current: Option<Card> = None;

    for (index, line) in unfold_lines(data).iter().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("BEGIN:VCARD") {
            if current.is_some() {
                return Err(ParseError::NestedBegin { line: line_no });
            }
            current = Some(Card::default());
            continue;
        }

        if trimmed.eq_ignore_ascii_case("END:VCARD") {
            match current.take() {
                Some(card) => cards.push(card),
                None => return Err(ParseError::UnmatchedEnd { line: line_no }),
            }
            continue;
        }

        let Some(card) = current.as_mut() else {
            // Text between cards carries no contact data.
            continue;
        };

        if let Some(property) = split_property(trimmed) {
            card.push(property);
        }
    }

    if current.is_some() {
        return Err(ParseError::MissingEnd);
    }

    Ok(cards)
}

/// Join folded continuation lines (leading space or tab) onto the line
/// they continue, dropping the fold character.
fn unfold_lines(input: &str) -> Vec<String> {
    let input = normalize_line_endings(input);
    let mut lines: Vec<String> = Vec::new();
    for raw in input.lines() {
        if raw.starts_with(' ') || raw.starts_with('\t') {
            if let Some(last) = lines.last_mut() {
                last.push_str(&raw[1..]);
            } else {
                lines.push(raw[1..].to_string());
            }
        } else {
            lines.push(raw.to_string());
        }
    }
    lines
}

fn normalize_line_endings(input: &str) -> std::borrow::Cow<'_, str> {
    if !input.contains('\r') {
        return std::borrow::Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    std::borrow::Cow::Owned(out)
}

fn split_property(line: &str) -> Option<Property> {
    let (left, value) = line.split_once(':')?;
    let mut pieces = left.split(';');
    let name = pieces.next()?.trim();
    if name.is_empty() {
        return None;
    }

    Some(Property {
        name: name.to_string(),
        params: pieces.map(|piece| piece.trim().to_string()).collect(),
        value: value.trim_end().to_string(),
    })
}
