/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_empty_segments() {
        assert_eq!(parse_keywords("a, b ,,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }
}
