/// Splits a metadata line into its key and description.
///
/// Entries have the shape `key=description,<extra fields>`; the description
/// is the text before the first comma. Lines without a comma are not
/// entries, and both key and description must be non-empty.
fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    let (description, _extra) = rest.split_once(',')?;
    if description.is_empty() {
        return None;
    }
    Some((key, description))
}

fn format_entry(key: &str, description: &str) -> String {
    format!("{key} - {description}")
}

/// Resolves the description bound to `key` within a module's metadata lines.
///
/// Unlike [`resolve_value`](super::resolve_value), the *first* matching
/// entry wins: the metadata file is a dictionary, not an override stream.
pub fn describe_option(lines: &[String], key: &str) -> Option<String> {
    lines
        .iter()
        .filter_map(|line| parse_entry(line))
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(key, description)| format_entry(key, description))
}

/// Formats every parseable metadata entry, in file order.
pub fn describe_all(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| parse_entry(line))
        .map(|(key, description)| format_entry(key, description))
        .collect()
}
