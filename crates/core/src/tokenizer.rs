//! Delimited-list tokenizer for multi-value entries

/// Delimiters used by multi-resource list entries
pub const LIST_DELIMITERS: &str = " \t,\"";

/// Splits `text` on any character of `delimiters`, dropping empty tokens
pub fn tokens<'a>(text: &'a str, delimiters: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.split(move |c: char| delimiters.contains(c))
        .filter(|t| !t.is_empty())
}

/// Number of tokens in `text`
pub fn count(text: &str, delimiters: &str) -> usize {
    tokens(text, delimiters).count()
}

/// Token `index` parsed as a float; missing or malformed tokens read as 0
pub fn number(text: &str, delimiters: &str, index: usize) -> f64 {
    tokens(text, delimiters)
        .nth(index)
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_delimiters() {
        let text = "\"Crew 1\", Dozer\t  Engine";
        let got: Vec<&str> = tokens(text, LIST_DELIMITERS).collect();
        assert_eq!(got, vec!["Crew", "1", "Dozer", "Engine"]);
        assert_eq!(count("", LIST_DELIMITERS), 0);
    }

    #[test]
    fn test_number_defaults_to_zero() {
        assert_eq!(number("1.5, 2.5", LIST_DELIMITERS, 1), 2.5);
        assert_eq!(number("1.5, x", LIST_DELIMITERS, 1), 0.0);
        assert_eq!(number("1.5", LIST_DELIMITERS, 4), 0.0);
    }
}
