/// Resolves the value bound to `key` within a sequence of config lines.
///
/// A line matches when it begins with `<key>=`; the key is compared as
/// literal text, never as a pattern. Later bindings override earlier ones,
/// so the value of the *last* matching line is returned. Lines that do not
/// match the shape are inert.
pub fn resolve_value<'a>(key: &str, lines: &'a [String]) -> Option<&'a str> {
    let mut found = None;
    for line in lines {
        if let Some(value) = line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')) {
            found = Some(value);
        }
    }
    found
}
