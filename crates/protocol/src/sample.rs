//! Sample tags used when no tags are configured.

/// Returns the built-in list of sample tags.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::sample::sample_tags;
///
/// let tags = sample_tags();
/// assert!(tags.iter().all(|t| t.starts_with('#')));
/// ```
#[must_use]
pub fn sample_tags() -> Vec<String> {
    [
        "#love",
        "#instagood",
        "#photooftheday",
        "#beautiful",
        "#fashion",
        "#happy",
        "#tbt",
        "#cute",
        "#followme",
        "#like4like",
        "#follow",
        "#picoftheday",
        "#me",
        "#selfie",
        "#summer",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
