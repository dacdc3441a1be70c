use serde::{Deserialize, Serialize};

/// One server definition published in the community registry.
///
/// Records are immutable once fetched; identity is the `(name, version)`
/// pair. The registry attaches additional metadata (packages, remotes,
/// publisher details) that this layer passes through untouched via `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Reverse-DNS identifier, e.g. `io.github.example/weather-mcp`
    pub name: String,

    /// Published version string
    #[serde(default)]
    pub version: String,

    /// Free-text description shown in listings
    #[serde(default)]
    pub description: String,

    /// Registry-defined metadata this layer does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ServerRecord {
    /// Create a record with just the identifying fields, for tests and
    /// synthetic listings.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Short name without the reverse-DNS namespace.
    ///
    /// `io.github.kubeshop/testkube-mcp` becomes `testkube-mcp`.
    pub fn short_name(&self) -> &str {
        self.name
            .rsplit_once('/')
            .map_or(self.name.as_str(), |(_, short)| short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_strips_namespace() {
        let record = ServerRecord::new("io.github.arm/arm-mcp", "1.0.0", "");
        assert_eq!(record.short_name(), "arm-mcp");
    }

    #[test]
    fn short_name_without_namespace_is_unchanged() {
        let record = ServerRecord::new("plain-name", "1.0.0", "");
        assert_eq!(record.short_name(), "plain-name");
    }

    #[test]
    fn unknown_registry_fields_round_trip() {
        let json = serde_json::json!({
            "name": "io.example/server",
            "version": "2.1.0",
            "description": "demo",
            "packages": [{"registryType": "oci"}],
        });

        let record: ServerRecord =
            serde_json::from_value(json.clone()).expect("record should parse");
        assert_eq!(record.name, "io.example/server");
        assert!(record.extra.contains_key("packages"));

        let back = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(back, json);
    }
}
