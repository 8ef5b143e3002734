use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub redis_url: Option<String>,
    pub mailjet_api_url: String,
    pub mailjet_api_version: String,
    pub mailjet_api_key: Option<String>,
    pub mailjet_private_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mailjet_api_url = env::var("MAILJET_API_URL")
            .unwrap_or_else(|_| "https://api.mailjet.com".to_string());
        if !mailjet_api_url.starts_with("http://") && !mailjet_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(mailjet_api_url));
        }

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            redis_url: non_empty_var("REDIS_URL"),
            mailjet_api_url: mailjet_api_url.trim_end_matches('/').to_string(),
            mailjet_api_version: env::var("MAILJET_API_VERSION")
                .unwrap_or_else(|_| "v3.1".to_string()),
            mailjet_api_key: non_empty_var("MAILJET_API_KEY"),
            mailjet_private_key: non_empty_var("MAILJET_PRIVATE_KEY"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Endpoint the relay posts messages to, e.g. `https://api.mailjet.com/v3.1/send`
    pub fn send_endpoint(&self) -> String {
        format!("{}/{}/send", self.mailjet_api_url, self.mailjet_api_version)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("MAILJET_API_URL must be an http(s) URL, got {0}")]
    InvalidApiUrl(String),
}
