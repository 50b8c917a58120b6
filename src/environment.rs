//! API host selection.

/// Base URL of the hosted production API.
pub const PRODUCTION_URL: &str = "https://api.usetapestry.dev";

/// The server environment a client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    base_url: String,
}

impl Environment {
    /// The hosted production environment.
    pub fn production() -> Self {
        Self::custom(PRODUCTION_URL)
    }

    /// A self-hosted or staging deployment at the given base URL.
    pub fn custom(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Environment { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::production()
    }
}
