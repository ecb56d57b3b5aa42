//! Display-friendly name shortening.

/// Returns the first whitespace-delimited token of a full name.
///
/// # Example
///
/// ```
/// use chatviz::name::first_name;
///
/// assert_eq!(first_name("Jane Q. Doe"), "Jane");
/// assert_eq!(first_name("Madonna"), "Madonna");
/// ```
///
/// # Panics
///
/// Panics if `full_name` is empty or contains only whitespace. That is a
/// programming-contract violation, not a recoverable user error: callers
/// are expected to pass sender names taken from well-formed exports.
pub fn first_name(full_name: &str) -> &str {
    assert!(!full_name.is_empty(), "first_name requires a non-empty name");
    full_name
        .split_whitespace()
        .next()
        .expect("name contains no tokens")
}
