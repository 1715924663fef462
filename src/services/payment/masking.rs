const VISIBLE_DIGITS: usize = 4;

/// Masks every character of a card number except the last four.
///
/// The masked value keeps the original length. Inputs shorter than four
/// characters are masked entirely so that nothing leaks.
pub fn mask_card_number(card_number: &str) -> String {
    let len = card_number.chars().count();
    if len < VISIBLE_DIGITS {
        return "*".repeat(len);
    }

    card_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < len - VISIBLE_DIGITS { '*' } else { c })
        .collect()
}
