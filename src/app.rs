use crate::api::ApiClient;
use crate::auth::AuthService;
use crate::config::Config;
use crate::db::connection::init_db;
use crate::db::Database;
use crate::errors::ServerError;
use crate::rate_limit::RateLimiter;

/// Shared by every worker thread.
#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub db: Database,
    pub api: ApiClient,
    pub limiter: RateLimiter,
}

impl App {
    /// Builds the backend client and applies the schema.
    pub fn new(config: Config) -> Result<Self, ServerError> {
        let api = ApiClient::new(
            config.api_base_url.clone(),
            config.auth_app_url.clone(),
            config.api_timeout,
        )?;
        let db = Database::new(config.database_path.clone());
        init_db(&db)?;
        let limiter = RateLimiter::new(config.rate_limit_per_client, config.rate_limit_window);
        Ok(Self {
            config,
            db,
            api,
            limiter,
        })
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.api, &self.db)
    }

    pub fn storage_base(&self) -> &str {
        &self.config.storage_base_url
    }
}
