//! Configuration for the playground

use odrl_rdf::ns::{dct, ex, foaf, odrl, temp, xsd};
use odrl_rdf::PrefixMap;
use odrl_report::REPORT_NS;
use serde::{Deserialize, Serialize};

/// Main playground configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Prefixes used when rendering report text
    #[serde(default = "default_prefixes")]
    pub prefixes: PrefixMap,

    /// Remote test-case index
    #[serde(default)]
    pub test_cases: TestCaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            test_cases: TestCaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Remote test-case index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseConfig {
    /// URL of the Turtle index document; unset disables the loader
    #[serde(default)]
    pub index_url: Option<String>,

    /// Namespace of the index vocabulary (`TestCase`, `policy`, `request`,
    /// `stateOfTheWorld`)
    #[serde(default = "default_manifest_namespace")]
    pub manifest_namespace: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for TestCaseConfig {
    fn default() -> Self {
        Self {
            index_url: None,
            manifest_namespace: default_manifest_namespace(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// The fixed prefix set used to render reports.
pub fn default_prefixes() -> PrefixMap {
    PrefixMap::new()
        .with("odrl", odrl::NS)
        .with("ex", ex::NS)
        .with("temp", temp::NS)
        .with("dct", dct::NS)
        .with("xsd", xsd::NS)
        .with("foaf", foaf::NS)
        .with("report", REPORT_NS)
}

fn default_manifest_namespace() -> String {
    "http://example.com/test-case/".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PlaygroundConfig {
    /// Load configuration from defaults, an optional file, and
    /// `ODRL_PLAYGROUND__*` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&PlaygroundConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ODRL_PLAYGROUND")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
