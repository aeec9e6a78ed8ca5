/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '_';

/// Name used when the input normalizes to nothing.
const FALLBACK_NAME: &str = "identicon";

/// File stem for an input string: lowercase, with whitespace and path
/// separators replaced by `separator`.
pub fn format_image_name(input: &str, separator: char) -> String {
    let name: String = input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                separator
            } else {
                c
            }
        })
        .collect();

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}
