use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};

/// Admin API connection settings. Immutable once a client is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Gateway base URL without the admin port, e.g. `http://10.0.0.5`.
    pub url: String,

    /// Shared secret sent as `X-API-KEY` on every request.
    pub admin_secret: String,

    /// Admin API port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Admin API path prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Reuse one process-wide transport across all clients built with
    /// `shared = true`. The first such client's settings win.
    #[serde(default = "default_shared")]
    pub shared: bool,
}

fn default_port() -> u16 {
    9180
}

fn default_prefix() -> String {
    "apisix".into()
}

fn default_shared() -> bool {
    true
}

impl ClientConfig {
    pub fn new(url: &str, admin_secret: &str) -> Self {
        Self {
            url: url.to_string(),
            admin_secret: admin_secret.to_string(),
            port: default_port(),
            prefix: default_prefix(),
            shared: default_shared(),
        }
    }

    /// Load from `APISIX_*` environment variables
    /// (`APISIX_URL`, `APISIX_ADMIN_SECRET`, `APISIX_PORT`, `APISIX_PREFIX`,
    /// `APISIX_SHARED`).
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("APISIX_")).extract()
    }

    /// Base URL every scope request is resolved against:
    /// `{url}:{port}/{prefix}/admin`, with any trailing slash on the prefix
    /// trimmed.
    pub(crate) fn admin_base(&self) -> String {
        format!(
            "{}:{}/{}/admin",
            self.url,
            self.port,
            self.prefix.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost", "123");
        assert_eq!(config.port, 9180);
        assert_eq!(config.prefix, "apisix");
        assert!(config.shared);
        assert_eq!(config.admin_base(), "http://localhost:9180/apisix/admin");
    }

    #[test]
    fn test_prefix_trailing_slash_trimmed() {
        let mut config = ClientConfig::new("http://gw", "s");
        config.prefix = "custom/".into();
        config.port = 8080;
        assert_eq!(config.admin_base(), "http://gw:8080/custom/admin");
    }

    #[test]
    fn test_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APISIX_URL", "http://gateway.internal");
            jail.set_env("APISIX_ADMIN_SECRET", "top-secret");
            jail.set_env("APISIX_PORT", "9280");
            let config = ClientConfig::from_env()?;
            assert_eq!(config.url, "http://gateway.internal");
            assert_eq!(config.admin_secret, "top-secret");
            assert_eq!(config.port, 9280);
            assert_eq!(config.prefix, "apisix");
            Ok(())
        });
    }

    #[test]
    fn test_from_env_missing_secret_fails() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APISIX_URL", "http://gateway.internal");
            assert!(ClientConfig::from_env().is_err());
            Ok(())
        });
    }
}
