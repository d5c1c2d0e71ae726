//! Application configuration.

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);
        let bind_addr = format!("0.0.0.0:{port}");

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            "dev-secret-change-in-production-minimum-32-characters".to_string()
        });

        let token_ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:5173,http://localhost:5174,http://localhost:3000".to_string()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl_minutes,
            cors_allowed_origins,
        })
    }
}
