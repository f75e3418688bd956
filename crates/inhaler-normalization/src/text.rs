//! Casing helpers for free-text columns.

/// Token that joins combined ingredients and is never capitalized.
const COMBINATION_SEPARATOR: &str = "+";

/// Capitalize each space-separated word and lower-case the rest of it.
///
/// Splits on single spaces so runs of spaces are preserved, and passes the
/// `+` separator through untouched:
/// `"SALMETEROL + FLUTICASONA"` becomes `"Salmeterol + Fluticasona"`.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word == COMBINATION_SEPARATOR {
                return word.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
