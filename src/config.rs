/// Application configuration, loaded from environment variables.
/// In debug builds a `.env` file is picked up first.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the storefront backend that owns the order data
    pub api_base_url: String,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Config: loaded .env file");
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let api_base_url = std::env::var("ORDERDESK_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        tracing::info!("Config: backend base url {api_base_url}");

        Self { api_base_url }
    }

    /// Storefront admin home page, linked from the navbar.
    pub fn admin_home_url(&self) -> String {
        format!("{}/admin/", self.api_base_url)
    }
}
