//! Parsed form of `https://` server references.
//!
//! Catalog and profile commands accept direct registry links such as
//! `https://registry.modelcontextprotocol.io/v0/servers/io.example%2Fweather/versions/1.2.0`
//! and resolve them through the single-server lookup endpoints. This module
//! turns such a reference into its `(base, name, version)` parts and back.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use super::error::RegistryError;

/// Version label the registry uses for "whatever is newest".
pub const LATEST_VERSION: &str = "latest";

// Characters that must be escaped inside a single path segment, matching
// url.PathEscape semantics: '/' in a server name becomes %2F.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A registry server reference broken into its addressable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl {
    base: String,
    name: String,
    version: String,
}

impl ServerUrl {
    /// Build a reference from parts. `base` is the registry origin without a
    /// trailing slash, e.g. `https://registry.modelcontextprotocol.io`.
    pub fn new(
        base: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse an `https://` server reference.
    ///
    /// Accepted shapes:
    /// - `<base>/v0/servers/{name}` (version defaults to `latest`)
    /// - `<base>/v0/servers/{name}/versions/{version}`
    pub fn parse(reference: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidServerUrl {
            url: reference.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(reference).map_err(|e| invalid(&e.to_string()))?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(invalid("scheme must be http or https"));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        let (name, version) = match segments.as_slice() {
            ["v0", "servers", name] => (*name, LATEST_VERSION),
            ["v0", "servers", name, "versions", version] => (*name, *version),
            _ => return Err(invalid("expected path /v0/servers/{name}[/versions/{version}]")),
        };

        let name = percent_decode_str(name)
            .decode_utf8()
            .map_err(|_| invalid("server name is not valid UTF-8"))?
            .into_owned();
        let version = percent_decode_str(version)
            .decode_utf8()
            .map_err(|_| invalid("version is not valid UTF-8"))?
            .into_owned();

        let base = url.origin().ascii_serialization();
        Ok(Self::new(base, name, version))
    }

    /// Registry origin, e.g. `https://registry.modelcontextprotocol.io`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Decoded server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested version, possibly the `latest` label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// True when the reference asks for the floating `latest` version.
    pub fn is_latest(&self) -> bool {
        self.version == LATEST_VERSION
    }

    /// Same reference pinned to a concrete version.
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            base: self.base.clone(),
            name: self.name.clone(),
            version: version.into(),
        }
    }

    /// URL of the versions listing for this server.
    pub fn versions_list_url(&self) -> String {
        format!(
            "{}/v0/servers/{}/versions",
            self.base,
            utf8_percent_encode(&self.name, PATH_SEGMENT)
        )
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.versions_list_url(),
            utf8_percent_encode(&self.version, PATH_SEGMENT)
        )
    }
}
