use crate::errors::AppError;

/// Process-wide settings, read from the environment once at startup and
/// shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub city: String,
    pub hero: String,
    pub environment: String,
    pub version: String,
    pub port: u16,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = env_or("PORT", "5000")
            .parse()
            .map_err(|_| AppError::InvalidConfig("PORT must be a valid port number".to_string()))?;

        Ok(Self {
            city: env_or("CITY_NAME", "Unknown City"),
            hero: env_or("HERO_NAME", "Unknown Hero"),
            environment: env_or("ENVIRONMENT", "unknown"),
            version: env_or("VERSION", "1.0.0"),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // from_env reads process-wide state; serialize the tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 5] = ["CITY_NAME", "HERO_NAME", "ENVIRONMENT", "VERSION", "PORT"];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn defaults_when_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.city, "Unknown City");
        assert_eq!(config.hero, "Unknown Hero");
        assert_eq!(config.environment, "unknown");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn environment_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("CITY_NAME", "Metropolis");
        std::env::set_var("HERO_NAME", "Superman");
        std::env::set_var("PORT", "8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.city, "Metropolis");
        assert_eq!(config.hero, "Superman");
        assert_eq!(config.port, 8080);
        clear_env();
    }

    #[test]
    fn rejects_unparseable_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("PORT", "batcave");

        assert!(Config::from_env().is_err());
        clear_env();
    }
}
