//! URL building utilities for the admin REST endpoints

use url::Url;

/// Centralized URL builder for the two backend surfaces.
/// Eliminates duplication and provides consistent URL construction.
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    endpoint: &'a Url,
    parts: Vec<String>,
    query_params: Vec<(String, String)>,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(endpoint: &'a Url) -> Self {
        Self {
            endpoint,
            parts: Vec::new(),
            query_params: Vec::new(),
        }
    }

    /// Add a raw path segment (API version, resource name, method).
    pub fn path(mut self, part: &str) -> Self {
        self.parts.push(part.to_string());
        self
    }

    /// Add database node segments, percent-encoded.
    pub fn node(mut self, segments: &[&str]) -> Self {
        self.parts
            .extend(segments.iter().map(|s| urlencoding::encode(s).into_owned()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the final URL string.
    pub fn build(self) -> String {
        let mut url = format!(
            "{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            self.parts.join("/")
        );

        if !self.query_params.is_empty() {
            let query_string = self
                .query_params
                .into_iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }

        url
    }

    /// Build a realtime-database node URL; the REST surface addresses a
    /// node by appending `.json` to its path.
    pub fn build_node(mut self) -> String {
        if let Some(last) = self.parts.last_mut() {
            last.push_str(".json");
        }
        self.build()
    }
}
