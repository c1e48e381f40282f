//! Value providers: the raw string sources binders read from.
//!
//! A [`ValueProvider`] gives a binder read access to the values stored under
//! a key on the current request, without the binder knowing whether those
//! values came from the header map, the query string, or an earlier decoding
//! step. Presence and content are separate questions: a key can be present
//! with zero values (for example a header that decoded to no tokens), which
//! must not be confused with a key the client never sent.

use crate::error::BindError;
use http::HeaderMap;
use tracing::debug;

/// Read access to the raw values stored under a key.
pub trait ValueProvider {
    /// Whether the key is present at all on this source.
    fn contains(&self, key: &str) -> bool;

    /// All values for `key`, in encounter order.
    ///
    /// Empty result and absent key are different states; callers that care
    /// must check [`contains`](ValueProvider::contains) first.
    fn values(&self, key: &str) -> Result<Vec<String>, BindError>;
}

/// [`ValueProvider`] over a request header map.
///
/// Lookup is case-insensitive as header names are. Each raw header line is
/// one value; a line that is not valid UTF-8 fails the whole lookup with
/// [`BindError::Encoding`].
pub struct HeaderValues<'a> {
    headers: &'a HeaderMap,
}

impl<'a> HeaderValues<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }
}

impl ValueProvider for HeaderValues<'_> {
    fn contains(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    fn values(&self, key: &str) -> Result<Vec<String>, BindError> {
        self.headers
            .get_all(key)
            .iter()
            .map(|value| value.to_str().map(str::to_owned).map_err(|_| BindError::encoding(key)))
            .collect()
    }
}

/// [`ValueProvider`] over parsed query-string pairs.
///
/// Repeated keys keep their order; `?k=a&k=b` yields `["a", "b"]` for `k`.
pub struct QueryValues {
    pairs: Vec<(String, String)>,
}

impl QueryValues {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// A query string that does not parse as key/value pairs is treated as
    /// carrying no pairs; malformed queries are a normal client mistake, not
    /// a binding failure.
    pub fn parse(query: &str) -> Self {
        let pairs = match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => pairs,
            Err(e) => {
                debug!(cause = %e, "unparseable query string, treating as empty");
                Vec::new()
            }
        };
        Self { pairs }
    }

    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }
}

impl ValueProvider for QueryValues {
    fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    fn values(&self, key: &str) -> Result<Vec<String>, BindError> {
        Ok(self.pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v.clone()).collect())
    }
}

/// In-memory [`ValueProvider`] carrying already-decoded tokens for one key.
///
/// This is the substitution object a wrapping binder hands to its delegate:
/// the delegate keeps its own logic but reads the adjusted values instead of
/// the request's raw ones. The key counts as present even when the token set
/// is empty, so "header present but decoded to nothing" survives delegation.
pub struct DecodedValues {
    key: String,
    tokens: Vec<String>,
}

impl DecodedValues {
    pub fn new<K: Into<String>>(key: K, tokens: Vec<String>) -> Self {
        Self { key: key.into(), tokens }
    }
}

impl ValueProvider for DecodedValues {
    fn contains(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }

    fn values(&self, key: &str) -> Result<Vec<String>, BindError> {
        if self.contains(key) { Ok(self.tokens.clone()) } else { Ok(Vec::new()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn header_values_are_case_insensitive_and_ordered() {
        let mut headers = HeaderMap::new();
        headers.append("Hello", HeaderValue::from_static("a,b"));
        headers.append("hello", HeaderValue::from_static("c"));

        let provider = HeaderValues::new(&headers);
        assert!(provider.contains("HELLO"));
        assert_eq!(provider.values("Hello").unwrap(), ["a,b", "c"]);
    }

    #[test]
    fn header_values_absent_key() {
        let headers = HeaderMap::new();
        let provider = HeaderValues::new(&headers);
        assert!(!provider.contains("Hello"));
        assert_eq!(provider.values("Hello").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn header_values_reject_non_utf8() {
        let mut headers = HeaderMap::new();
        headers.append("Hello", HeaderValue::from_bytes(b"\xff\xfe").unwrap());

        let provider = HeaderValues::new(&headers);
        assert!(matches!(provider.values("Hello"), Err(BindError::Encoding { .. })));
    }

    #[test]
    fn query_values_keep_repeated_keys_in_order() {
        let provider = QueryValues::parse("tags=a&other=x&tags=b");
        assert!(provider.contains("tags"));
        assert_eq!(provider.values("tags").unwrap(), ["a", "b"]);
        assert_eq!(provider.values("other").unwrap(), ["x"]);
    }

    #[test]
    fn query_values_decode_percent_escapes() {
        let provider = QueryValues::parse("q=a%2Cb&q=c+d");
        assert_eq!(provider.values("q").unwrap(), ["a,b", "c d"]);
    }

    #[test]
    fn empty_query_has_no_keys() {
        let provider = QueryValues::empty();
        assert!(!provider.contains("tags"));
        assert_eq!(provider.values("tags").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn decoded_values_key_is_present_even_without_tokens() {
        let provider = DecodedValues::new("Hello", Vec::new());
        assert!(provider.contains("hello"));
        assert_eq!(provider.values("Hello").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn decoded_values_only_answer_their_key() {
        let provider = DecodedValues::new("Hello", vec!["a".to_owned()]);
        assert!(!provider.contains("Other"));
        assert_eq!(provider.values("Other").unwrap(), Vec::<String>::new());
        assert_eq!(provider.values("hello").unwrap(), ["a"]);
    }
}
