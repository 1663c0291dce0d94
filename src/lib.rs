pub mod config;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod gingr;
pub mod server;

use config::Config;
use gingr::GingrClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gingr: GingrClient,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let gingr = GingrClient::new(http, &config);
        Self { config, gingr }
    }
}
