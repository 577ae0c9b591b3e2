use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub mode: RunMode,
    pub store: StoreBackend,
    pub dynamodb_endpoint: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// Serve invocations from the Lambda runtime API.
    Lambda,
    /// Serve the handler over a local HTTP listener.
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let table_name = env_or("INTAKE_TABLE_NAME", "usersDB");
        if table_name.trim().is_empty() {
            return Err("INTAKE_TABLE_NAME must not be empty".to_string());
        }

        let mode = match env_or("INTAKE_MODE", "lambda").as_str() {
            "lambda" => RunMode::Lambda,
            "local" => RunMode::Local,
            other => return Err(format!("Invalid INTAKE_MODE: {other}")),
        };

        let store = match env_or("INTAKE_STORE", "dynamodb").as_str() {
            "dynamodb" => StoreBackend::DynamoDb,
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Invalid INTAKE_STORE: {other}")),
        };

        let dynamodb_endpoint = std::env::var("INTAKE_DYNAMODB_ENDPOINT")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let host: IpAddr = env_or("INTAKE_HOST", "127.0.0.1")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        Ok(Config {
            table_name,
            mode,
            store,
            dynamodb_endpoint,
            host,
            port,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
