use enhancer_ai::refiner::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Hostname or IP to bind; resolved by the listener, so `localhost` and `::` work.
    pub host: String,
    /// Bind port (default 8000). Override with PORT.
    pub port: u16,
    /// sea-orm connection string. Override with DATABASE_URL.
    pub database_url: String,
    /// Root of the chat-completion provider. Override with OPENAI_BASE_URL.
    pub openai_base_url: String,
    pub max_body_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparseable values fall back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let host = get("HOST").unwrap_or("0.0.0.0".into());
        let port = get("PORT").and_then(|s| s.parse().ok()).unwrap_or(8000);
        let database_url = get("DATABASE_URL").unwrap_or("sqlite://prompts.db?mode=rwc".into());
        let openai_base_url = get("OPENAI_BASE_URL").unwrap_or(DEFAULT_BASE_URL.into());
        let max_body_bytes = get("MAX_BODY_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1024 * 1024); // 1 MiB

        Self {
            host,
            port,
            database_url,
            openai_base_url,
            max_body_bytes,
        }
    }

    /// URL scheme only; the full URL may carry credentials.
    pub fn database_backend(&self) -> &str {
        self.database_url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or("unknown")
    }
}
