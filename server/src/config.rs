//! Server configuration parsed from environment variables.

use dcr_widget::state::documents::Document;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: String },

    /// A variable is set but does not parse.
    #[error("config parse failed: {var}={value:?}")]
    Parse { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Optional:
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse { var: "PORT".into(), value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Workspace slug per catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspaces {
    pdf1: String,
    pdf2: String,
    pdf3: String,
}

impl Workspaces {
    #[must_use]
    pub fn slug(&self, document: Document) -> &str {
        match document {
            Document::DnhDcr => &self.pdf1,
            Document::GujaratDcr => &self.pdf2,
            Document::DiuDcr => &self.pdf3,
        }
    }
}

impl Default for Workspaces {
    fn default() -> Self {
        Self {
            pdf1: default_workspace(Document::DnhDcr).to_owned(),
            pdf2: default_workspace(Document::GujaratDcr).to_owned(),
            pdf3: default_workspace(Document::DiuDcr).to_owned(),
        }
    }
}

/// Connection settings for the AnythingLLM-compatible chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    pub workspaces: Workspaces,
    pub timeouts: UpstreamTimeouts,
}

impl UpstreamConfig {
    /// Build typed upstream config from environment variables.
    ///
    /// Required:
    /// - `ANYTHINGLLM_BASE_URL`
    /// - `ANYTHINGLLM_API_KEY`
    ///
    /// Optional:
    /// - `ANYTHINGLLM_WORKSPACE_PDF1`..`PDF3`: workspace slugs
    /// - `ANYTHINGLLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `ANYTHINGLLM_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = required("ANYTHINGLLM_BASE_URL")?
            .trim_end_matches('/')
            .to_owned();
        let api_key = required("ANYTHINGLLM_API_KEY")?;

        let workspace = |document: Document| {
            std::env::var(workspace_var(document))
                .ok()
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_workspace(document).to_owned())
        };
        let workspaces = Workspaces {
            pdf1: workspace(Document::DnhDcr),
            pdf2: workspace(Document::GujaratDcr),
            pdf3: workspace(Document::DiuDcr),
        };

        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("ANYTHINGLLM_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("ANYTHINGLLM_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, api_key, workspaces, timeouts })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing { var: var.into() })
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn workspace_var(document: Document) -> String {
    format!("ANYTHINGLLM_WORKSPACE_{}", document.id().to_ascii_uppercase())
}

fn default_workspace(document: Document) -> &'static str {
    match document {
        Document::DnhDcr => "dnh-dcr",
        Document::GujaratDcr => "gujarat-dcr",
        Document::DiuDcr => "diu-dcr",
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
