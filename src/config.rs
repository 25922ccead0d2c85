use crate::consts::{BACKEND_URL_ENV, CLI_ENVIRONMENT_ENV, DEFAULT_BACKEND_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

/// Resolved settings for talking to the Deploifai backend.
///
/// The backend URL is taken as-is. A malformed value is only noticed when a
/// request is sent.
#[derive(Debug, Clone)]
pub struct Configs {
    backend_url: String,
}

impl Configs {
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn from_env_value(backend_url: Option<String>) -> Self {
        Self {
            backend_url: backend_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned()),
        }
    }

    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    pub fn get_environment_id() -> Environment {
        parse_environment(std::env::var(CLI_ENVIRONMENT_ENV).ok().as_deref())
    }

    pub fn get_graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.backend_url)
    }
}

fn parse_environment(value: Option<&str>) -> Environment {
    match value.map(str::to_lowercase).as_deref() {
        Some("development") | Some("dev") => Environment::Development,
        _ => Environment::Production,
    }
}
