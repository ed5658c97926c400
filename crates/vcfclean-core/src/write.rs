use crate::card::Card;

/// Serialize one card, `\n` line endings, no trailing blank line.
pub fn card_to_string(card: &Card) -> String {
    let mut out = String::from("BEGIN:VCARD\n");
    for prop in &card.properties {
        out.push_str(&prop.to_line());
        out.push('\n');
    }
    out.push_str("END:VCARD\n");
    out
}

/// Serialize a batch of cards, separated by one blank line.
pub fn write_vcf(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&card_to_string(card));
        out.push('\n');
    }
    out
}
