use crate::UriError;

/// Ordered query key-value mapping.
///
/// Keys are unique and keep the position of their first occurrence, reassigning
/// a key overwrites its value in place. Equality is order-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: Vec<(String, String)>,
}

impl Query {
    /// Empty mapping.
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.0 == key)
            .map(|entry| entry.1.as_str())
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|entry| (entry.0.as_str(), entry.1.as_str()))
    }

    /// Iterate keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.0.as_str())
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }
}

/// Decompose a raw query span into an ordered mapping.
///
/// Splits on `&`, then each part on its first `=`, later `=` bytes stay in the
/// value. A part without `=` is rejected rather than recovered.
pub(crate) fn parse(raw: &str) -> Result<Query, UriError> {
    let mut query = Query::new();

    if raw.is_empty() {
        return Ok(query);
    }

    for part in raw.split('&') {
        let Some((key, value)) = part.split_once('=') else {
            return Err(UriError::Query(part.to_owned()));
        };
        query.insert(key, value);
    }

    Ok(query)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decompose() {
        assert!(parse("").unwrap().is_empty());

        let query = parse("q1=v1&q2=v2&q3=v3").unwrap();
        assert_eq!(query.len(), 3);
        assert_eq!(query.get("q2"), Some("v2"));
        assert_eq!(query.get("q4"), None);
        assert_eq!(
            query.iter().collect::<Vec<_>>(),
            [("q1", "v1"), ("q2", "v2"), ("q3", "v3")],
        );
    }

    #[test]
    fn test_first_separator_splits() {
        let query = parse("a=b=c").unwrap();
        assert_eq!(query.get("a"), Some("b=c"));

        let query = parse("a=").unwrap();
        assert_eq!(query.get("a"), Some(""));
    }

    #[test]
    fn test_override_keeps_first_position() {
        let query = parse("a=1&b=2&a=3").unwrap();
        assert_eq!(query.get("a"), Some("3"));
        assert_eq!(query.get("b"), Some("2"));
        assert_eq!(query.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(parse("a"), Err(UriError::Query("a".to_owned())));
        assert_eq!(parse("a=1&b"), Err(UriError::Query("b".to_owned())));
        assert_eq!(parse("a=1&&b=2"), Err(UriError::Query(String::new())));
    }
}
