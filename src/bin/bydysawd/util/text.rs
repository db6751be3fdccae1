/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];

    for word in text.split_whitespace() {
        let Some(current) = lines.last_mut() else {
            break;
        };
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("invalid term 'X3b'", 20), vec!["invalid term 'X3b'"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("equation has no separator", 12),
            vec!["equation has", "no separator"]
        );
    }

    #[test]
    fn wrap_puts_long_word_on_its_own_line() {
        assert_eq!(wrap("a Z18446744073709551615 b", 5), vec!["a", "Z18446744073709551615", "b"]);
    }

    #[test]
    fn wrap_empty_text_yields_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
