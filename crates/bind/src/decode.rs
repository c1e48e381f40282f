//! The header array decoder.
//!
//! Clients commonly send array-valued headers either as repeated header lines
//! or as a single line with space/comma separated entries (or any mix of the
//! two). This module turns that raw value set into one flat, ordered token
//! sequence; converting tokens into typed values is the job of
//! [`Bindable`](crate::Bindable), not of the decoder.

/// The delimiter set used to split raw header values.
pub const DELIMITERS: [char; 2] = [' ', ','];

/// Decodes a set of raw header values into an ordered token sequence.
///
/// Every raw value is split on any run of space or comma characters, empty
/// substrings are discarded, and the surviving tokens are appended in
/// encounter order. An absent header (empty input) yields an empty vector:
/// there is no error case.
///
/// # Example
/// ```
/// use modelbind::decode;
///
/// let raw = ["a,b c", "d"];
/// assert_eq!(decode(raw), ["a", "b", "c", "d"]);
/// ```
pub fn decode<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .flat_map(|value| value.split(DELIMITERS))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
