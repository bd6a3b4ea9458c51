use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub agenda: AgendaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the local events database file.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Search provider endpoint. Overridable so tests can point it at a
    /// local mock; the parse contract stays the same.
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgendaConfig {
    /// The fixed event-listing page the scrape tool targets.
    pub url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            database: DatabaseConfig {
                path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/events.db".to_string()),
            },
            search: SearchConfig {
                endpoint: env::var("SEARCH_ENDPOINT")
                    .unwrap_or_else(|_| "https://html.duckduckgo.com/html/".to_string()),
            },
            fetch: FetchConfig {
                user_agent: env::var("FETCH_USER_AGENT")
                    .unwrap_or_else(|_| "Mozilla/5.0".to_string()),
                timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            agenda: AgendaConfig {
                url: env::var("AGENDA_URL")
                    .unwrap_or_else(|_| "https://datacraft.paris/agenda/".to_string()),
            },
        })
    }
}
