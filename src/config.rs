use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env_or("DATABASE_URL", "sqlite://app.db?mode=rwc");

        EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0"),
            port: Self::get_env_or("PORT", "5555").parse().unwrap_or(5555),
            db_url,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
