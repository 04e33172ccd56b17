//! Request-side data: resource addresses, query bags, and URL composition.
//!
//! Every outbound request is fully determined by the connection, a
//! [`ResourceAddress`], a [`QueryParams`] bag, and an optional body; the
//! composer is a pure function of those inputs, which is what keeps the
//! dispatch engine testable without a live service.

use url::Url;

use crate::resources::Resource;

/// One logical endpoint: area path, optional project scope, optional
/// instance identifier and trailing sub-path, plus the API version the
/// endpoint shape requires. Constructed per call, never persisted.
#[derive(Debug, Clone)]
pub struct ResourceAddress {
    /// The resource area this endpoint belongs to.
    pub resource: Resource,
    /// Path under `_apis`; either the bare area name (`"build"`) or a
    /// composite already carrying a collection segment (`"build/builds"`).
    pub area: String,
    /// Project (optionally `project/team`) scoping the call, or `None` for
    /// organization-scoped endpoints.
    pub project: Option<String>,
    /// Instance identifier appended after the area path.
    pub id: Option<String>,
    /// Trailing sub-path appended after the instance identifier; may span
    /// several segments (`"logs/42"`).
    pub sub_resource: Option<String>,
    /// API version string for this exact endpoint shape.
    pub version: &'static str,
}

impl ResourceAddress {
    /// Address the root of a resource area.
    pub fn new(resource: Resource, version: &'static str) -> Self {
        Self {
            resource,
            area: resource.area().to_string(),
            project: None,
            id: None,
            sub_resource: None,
            version,
        }
    }

    /// Replace the area path with a composite one (e.g. `"build/builds"`).
    #[must_use]
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Scope the call to a project, or a `project/team` pair.
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Append an instance identifier segment.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a trailing sub-path after the instance identifier.
    #[must_use]
    pub fn sub(mut self, sub_resource: impl Into<String>) -> Self {
        self.sub_resource = Some(sub_resource.into());
        self
    }
}

/// Ordered query-parameter bag.
///
/// Entries with absent values are dropped at insertion; that filter is
/// deliberate, mirroring how facade methods forward large optional filter
/// sets. Insertion order is preserved so composed URLs are deterministic.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter; `None` values are silently dropped.
    pub fn insert<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.entries.iter()
    }
}

/// Join a list of ids into the comma-separated form the service expects in
/// query values. Empty lists collapse to an absent parameter.
pub fn join_ids<T: ToString>(ids: &[T]) -> Option<String> {
    if ids.is_empty() {
        None
    } else {
        Some(
            ids.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Percent-encode spaces in a caller-supplied path segment.
///
/// The service rejects literal spaces in path segments (team names are the
/// usual offenders) but accepts them in query values. Idempotent on input
/// that is already encoded.
pub fn encode_space(segment: &str) -> String {
    segment.replace(' ', "%20")
}

/// Compose the final request URL.
///
/// Path shape: `{base}/{project?}/_apis/{area}[/{id}][/{sub}]`, followed by
/// `?api-version={version}` and every present query entry as `&key=value`
/// with the value percent-encoded. Keys are emitted verbatim (`$top` stays
/// `$top`). Pure: identical inputs always yield the identical string.
pub fn compose_url(base: &Url, address: &ResourceAddress, query: &QueryParams) -> String {
    let mut url = base.as_str().trim_end_matches('/').to_string();

    if let Some(project) = &address.project {
        url.push('/');
        url.push_str(&encode_space(project));
    }

    url.push_str("/_apis/");
    url.push_str(&encode_space(&address.area));

    if let Some(id) = &address.id {
        url.push('/');
        url.push_str(&encode_space(id));
    }

    if let Some(sub) = &address.sub_resource {
        url.push('/');
        url.push_str(&encode_space(sub));
    }

    url.push_str("?api-version=");
    url.push_str(address.version);

    for (key, value) in query.iter() {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    url
}
