use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Root of the Gingr tenant, e.g. `https://yourapp.gingrapp.com`.
    pub gingr_base_url: String,
    pub gingr_api_key: String,
}

impl Config {
    /// Load configuration from the environment. Missing Gingr settings are
    /// left empty so the server can still start; see [`Config::missing_gingr_settings`].
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            gingr_base_url: std::env::var("GINGR_BASE_URL").unwrap_or_default(),
            gingr_api_key: std::env::var("GINGR_API_KEY").unwrap_or_default(),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }

    /// Names of the Gingr environment variables that were not set.
    pub fn missing_gingr_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gingr_base_url.trim().is_empty() {
            missing.push("GINGR_BASE_URL");
        }
        if self.gingr_api_key.trim().is_empty() {
            missing.push("GINGR_API_KEY");
        }
        missing
    }
}
