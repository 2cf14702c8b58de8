use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("BUZON_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid BUZON_HOST: {e}"))?;

        let port: u16 = env_or("BUZON_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid BUZON_PORT: {e}"))?;

        let data_dir = PathBuf::from(env_or("BUZON_DATA_DIR", "datos"));
        let database_path = PathBuf::from(env_or("BUZON_DATABASE_PATH", "database/usuarios.db"));
        let log_level = env_or("BUZON_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            data_dir,
            database_path,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
