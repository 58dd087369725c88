/// Normalize a raw comma-separated ticker list.
///
/// Uppercases, strips all whitespace, splits on commas, drops empty
/// segments and silently ignores anything past `max` entries. Duplicates
/// are kept; the caller gets one row per surviving entry.
pub fn parse_tickers(raw: &str, max: usize) -> Vec<String> {
    raw.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .take(max)
        .collect()
}
