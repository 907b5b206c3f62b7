//! Greedy word wrapping.

/// Splits `text` into lines no wider than `max_width`.
///
/// Words are separated by any whitespace and rejoined with single spaces. A
/// word is appended to the current line while the measured width of the
/// result stays strictly below `max_width`; otherwise it starts a new line. A
/// word that is wider than `max_width` on its own still gets a line to itself.
pub fn wrap_words<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}
