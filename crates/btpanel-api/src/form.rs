// Form payloads
//
// The panel reads everything from `application/x-www-form-urlencoded` bodies,
// so every field is a flat string. `Form` keeps insertion order so the body
// on the wire matches the order callers build it in.

use std::fmt::Display;

/// Field names the client fills in itself for every request.
pub const RESERVED_FIELDS: [&str; 2] = ["request_token", "request_time"];

/// An ordered set of form fields for one panel call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(String, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    ///
    /// Integers render in decimal and booleans as `true` / `false`.
    pub fn field(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// Append a field only when `value` is `Some`.
    pub fn field_opt(self, key: impl Into<String>, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Append a field, replacing an earlier value under the same key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First reserved field name present in this form, if any.
    pub(crate) fn reserved_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .map(|(k, _)| k.as_str())
            .find(|k| RESERVED_FIELDS.contains(k))
    }

    /// Prepend `base` ahead of this form's fields.
    pub(crate) fn merged_after(self, base: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut body = base;
        body.extend(self.fields);
        body
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Form {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (k, v) in iter {
            form.push(k, v);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_scalars_as_plain_strings() {
        let form = Form::new()
            .field("id", 42)
            .field("name", "example.com")
            .field("list", true)
            .field("type", -1);

        assert_eq!(form.get("id"), Some("42"));
        assert_eq!(form.get("name"), Some("example.com"));
        assert_eq!(form.get("list"), Some("true"));
        assert_eq!(form.get("type"), Some("-1"));
    }

    #[test]
    fn keeps_insertion_order_and_replaces_duplicates() {
        let form = Form::new()
            .field("p", 1)
            .field("limit", 15)
            .field("p", 2);

        let fields: Vec<_> = form.iter().collect();
        assert_eq!(fields, vec![("p", "2"), ("limit", "15")]);
    }

    #[test]
    fn optional_fields_are_skipped_when_absent() {
        let form = Form::new()
            .field_opt("search", None::<&str>)
            .field_opt("tojs", Some("get_site_list"));

        assert!(!form.contains_key("search"));
        assert_eq!(form.get("tojs"), Some("get_site_list"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn detects_reserved_fields() {
        let clean: Form = [("id", "1")].into_iter().collect();
        assert_eq!(clean.reserved_field(), None);

        let dirty = Form::new().field("id", 1).field("request_time", 0);
        assert_eq!(dirty.reserved_field(), Some("request_time"));
    }

    #[test]
    fn merge_places_base_fields_first() {
        let form = Form::new().field("id", 7);
        let body = form.merged_after(vec![("request_token".into(), "t".into())]);
        assert_eq!(
            body,
            vec![
                ("request_token".to_owned(), "t".to_owned()),
                ("id".to_owned(), "7".to_owned()),
            ]
        );
    }
}
