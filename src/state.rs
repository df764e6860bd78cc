use crate::config::Config;
use crate::orchestrator::Orchestrator;
use crate::transport::HttpTransport;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator<HttpTransport>>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(config.api_base.clone(), config.request_timeout)?;
        Ok(Self {
            orchestrator: Arc::new(Orchestrator::with_seed(
                transport,
                config.mode,
                config.demo_seed,
            )),
        })
    }
}
