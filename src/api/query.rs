/// Parses a query-string value as a plain number
///
/// Accepts trimmed decimal text such as `5`, ` 5 ` or `2.5`. Empty input,
/// non-numeric text and non-finite values are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
