//! Trust configuration with TOML file support.

use chattel_types::{Address, PublicKey};
use chattel_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TransactionError;

/// Which issuer to trust, and how verification should log.
///
/// ```toml
/// issuer = "chtl_..."
/// log_format = "json"
/// log_level = "info,chattel_transactions=debug"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Address of the trusted issuer. Genesis records must pay this address
    /// and carry a signature by its key.
    pub issuer: Address,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TrustConfig {
    pub fn new(issuer: Address) -> Self {
        Self {
            issuer,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TransactionError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| TransactionError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, TransactionError> {
        toml::from_str(s).map_err(|e| TransactionError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, TransactionError> {
        toml::to_string_pretty(self).map_err(|e| TransactionError::Config(e.to_string()))
    }

    /// The trusted issuer public key, recovered from the issuer address.
    pub fn issuer_public_key(&self) -> PublicKey {
        self.issuer.public_key()
    }

    /// Install the global tracing subscriber described by this config.
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init_logging(&self) -> bool {
        chattel_utils::init_logging(self.log_format, &self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chattel_crypto::{derive_address, keypair_from_seed};
    use std::io::Write;

    fn issuer_address() -> Address {
        derive_address(&keypair_from_seed(&[1u8; 32]).public)
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let toml = format!("issuer = \"{}\"\n", issuer_address());
        let config = TrustConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config, TrustConfig::new(issuer_address()));
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn full_config_parses() {
        let toml = format!(
            "issuer = \"{}\"\nlog_format = \"json\"\nlog_level = \"debug\"\n",
            issuer_address()
        );
        let config = TrustConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.issuer_public_key(),
            keypair_from_seed(&[1u8; 32]).public
        );
    }

    #[test]
    fn bad_issuer_is_config_error() {
        let err = TrustConfig::from_toml_str("issuer = \"chtl_nope\"\n").unwrap_err();
        assert!(matches!(err, TransactionError::Config(_)));
    }

    #[test]
    fn missing_issuer_is_config_error() {
        assert!(matches!(
            TrustConfig::from_toml_str("log_level = \"info\"\n"),
            Err(TransactionError::Config(_))
        ));
    }

    #[test]
    fn toml_roundtrip() {
        let config = TrustConfig::new(issuer_address());
        let text = config.to_toml_string().unwrap();
        assert_eq!(TrustConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "issuer = \"{}\"", issuer_address()).unwrap();
        let config = TrustConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.issuer, issuer_address());
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TrustConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TransactionError::Config(_)));
    }
}
