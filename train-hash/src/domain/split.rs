//! Delimiter splitting for schedule lines and their sub-fields.

/// Split `input` at every occurrence of `delimiter`.
///
/// The result always has at least one element. Text after the last
/// delimiter becomes the final element, so a trailing delimiter yields a
/// trailing empty string. Nothing is trimmed.
///
/// # Examples
///
/// ```
/// use train_hash::domain::split_fields;
///
/// assert_eq!(split_fields("a:b:c", ':'), vec!["a", "b", "c"]);
/// assert_eq!(split_fields("abc", ':'), vec!["abc"]);
/// assert_eq!(split_fields("a::b", ':'), vec!["a", "", "b"]);
/// ```
pub fn split_fields(input: &str, delimiter: char) -> Vec<&str> {
    input.split(delimiter).collect()
}
