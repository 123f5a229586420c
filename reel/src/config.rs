use anyhow::Context;
use anyhow::Result;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host: host.unwrap_or(DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
