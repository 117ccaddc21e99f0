//! Host-owned search parameters
//!
//! [`SearchParams`] is a shared handle to the mutable parameters object the
//! host application owns. Cloning the handle shares the same underlying map,
//! so every panel and observer sees the same object. Execution is
//! single-threaded; a borrow never outlives one call.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

/// Mapping from parameter key to string value
pub type ParamMap = BTreeMap<String, String>;

/// Shared handle to a host-owned parameters object
#[derive(Clone, Default)]
pub struct SearchParams {
    inner: Rc<RefCell<ParamMap>>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: ParamMap) -> Self {
        Self {
            inner: Rc::new(RefCell::new(map)),
        }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Set a single value (host-side write)
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), value.into());
    }

    /// Copy every entry of `values` onto the object, keeping keys it does not
    /// mention. The object itself is never replaced.
    pub fn merge(&self, values: &ParamMap) {
        let mut inner = self.inner.borrow_mut();
        for (key, value) in values {
            inner.insert(key.clone(), value.clone());
        }
    }

    /// Point-in-time copy of the current values
    pub fn snapshot(&self) -> ParamMap {
        self.inner.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Whether both handles refer to the same parameters object
    pub fn same_object(&self, other: &SearchParams) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.borrow().iter()).finish()
    }
}

impl Serialize for SearchParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.inner.borrow().serialize(serializer)
    }
}

/// Parse a `key=value` assignment. The value may be empty or contain `=`.
pub fn parse_assignment(input: &str) -> Option<(String, String)> {
    let (key, value) = input.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let params = SearchParams::new();
        let observer = params.clone();

        params.set("filename", "a.jpg");

        assert_eq!(observer.get("filename").as_deref(), Some("a.jpg"));
        assert!(params.same_object(&observer));
        assert!(!params.same_object(&SearchParams::new()));
    }

    #[test]
    fn test_merge_keeps_unmentioned_keys() {
        let params = SearchParams::from_pairs([("q", "boat"), ("filename", "")]);
        let mut update = ParamMap::new();
        update.insert("filename".into(), "sunset.jpg".into());

        params.merge(&update);

        assert_eq!(params.get("q").as_deref(), Some("boat"));
        assert_eq!(params.get("filename").as_deref(), Some("sunset.jpg"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_serializes_as_json_object() {
        let params = SearchParams::from_pairs([("orientation", "2"), ("filename", "x")]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"filename":"x","orientation":"2"}"#);
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("filename=sunset.jpg"),
            Some(("filename".into(), "sunset.jpg".into()))
        );
        assert_eq!(
            parse_assignment("reference="),
            Some(("reference".into(), String::new()))
        );
        assert_eq!(
            parse_assignment("q=a=b"),
            Some(("q".into(), "a=b".into()))
        );
        assert_eq!(parse_assignment("=x"), None);
        assert_eq!(parse_assignment("novalue"), None);
    }
}
