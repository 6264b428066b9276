use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:travel.db".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment")?;

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| "JWT_EXPIRATION_HOURS must be a valid number")?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number")?;

        let admin_email = env::var("ADMIN_EMAIL")
            .map_err(|_| "ADMIN_EMAIL must be set in environment")?;

        let admin_password = env::var("ADMIN_PASSWORD")
            .map_err(|_| "ADMIN_PASSWORD must be set in environment")?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
            port,
            admin_email,
            admin_password,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err("JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        if self.admin_email.is_empty() || !self.admin_email.contains('@') {
            return Err("ADMIN_EMAIL must be a valid email address".to_string());
        }

        if self.admin_password.is_empty() {
            return Err("ADMIN_PASSWORD must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret-key-must-be-at-least-32-chars-long!".to_string(),
            jwt_expiration_hours: 24,
            port: 8080,
            admin_email: "admin@smooth-travel.example".to_string(),
            admin_password: "bootstrap-password".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut config = valid_config();
        config.jwt_secret = "too-short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ttl_bounds() {
        let mut config = valid_config();
        config.jwt_expiration_hours = 0;
        assert!(config.validate().is_err());

        config.jwt_expiration_hours = 721;
        assert!(config.validate().is_err());

        // documented default: 24 hours
        config.jwt_expiration_hours = 24;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_admin_bootstrap_credentials_required() {
        let mut config = valid_config();
        config.admin_email = "not-an-email".to_string();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.admin_password = String::new();
        assert!(config.validate().is_err());
    }
}
