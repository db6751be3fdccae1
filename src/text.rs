//! Small scanning helpers shared by the formula and equation parsers.

/// Returns every byte position at which `ch` occurs in `text`, in ascending order.
///
/// The Bydysawd grammar is pure ASCII, so for well-formed input these are also
/// character positions.
///
/// ```
/// assert_eq!(bydysawd::indices_of("ax34x", 'x'), vec![1, 4]);
/// assert!(bydysawd::indices_of("ax34x", 'X').is_empty());
/// ```
pub fn indices_of(text: &str, ch: char) -> Vec<usize> {
    text.match_indices(ch).map(|(i, _)| i).collect()
}

/// Returns the position of the rightmost ASCII uppercase letter in `text`.
pub fn last_uppercase(text: &str) -> Option<usize> {
    // ASCII bytes never occur inside a multi-byte UTF-8 sequence.
    text.bytes().rposition(|b| b.is_ascii_uppercase())
}
