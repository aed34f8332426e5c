//! Utility functions and helpers.

pub mod http;

/// Title-case a company identifier for display.
///
/// Uppercases the first letter of each whitespace-separated word and
/// leaves the rest of the word untouched ("acme corp" -> "Acme Corp").
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
