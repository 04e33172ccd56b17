//! Model types shared across resource areas.

use serde::{Deserialize, Serialize};

/// The service's collection envelope: `{ "count": n, "value": [...] }`.
///
/// Endpoints that page server-side additionally return a continuation
/// token; the engine never resubmits it automatically — each call returns
/// exactly one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList<T> {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "continuationToken", default)]
    pub continuation_token: Option<String>,
}

impl<T> ResourceList<T> {
    /// Returns true if this list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the number of items in this list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            count: None,
            value: Vec::new(),
            continuation_token: None,
        }
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

/// Reference to an identity (user or group).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub unique_name: Option<String>,
    #[serde(default)]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Shallow reference to a team project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectReference {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
}

/// Bare id + url reference, used wherever the service links related
/// resources (work items on builds and pull requests, …).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_list_deserializes_envelope() {
        let list: ResourceList<ResourceRef> =
            serde_json::from_str(r#"{"count":2,"value":[{"id":"1"},{"id":"2"}]}"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.count, Some(2));
        assert!(list.continuation_token.is_none());
    }

    #[test]
    fn test_resource_list_tolerates_missing_count() {
        let list: ResourceList<ResourceRef> =
            serde_json::from_str(r#"{"value":[{"id":"1"}]}"#).unwrap();
        assert_eq!(list.count, None);
        assert!(!list.is_empty());
    }
}
