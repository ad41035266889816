use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("engelsiz.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub geocoding: Option<Geocoding>,
    pub webserver: Option<WebServer>,
    pub gateway: Option<Gateway>,
    pub admin: Option<Admin>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    pub country_codes: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Admin {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.admin.is_none());
        let nominatim = cfg.gateway.unwrap().nominatim.unwrap();
        assert_eq!(nominatim.timeout, Duration::from_secs(5));
        assert_eq!(nominatim.country_codes, "tr");
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [webserver]
            cors = true

            [admin]
            email = "admin@example.com"
            password = "secret1"
            "#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        assert!(cfg.geocoding.is_none());
        assert!(cfg.webserver.unwrap().cors);
        let admin = cfg.admin.unwrap();
        assert!(admin.name.is_none());
        assert_eq!(admin.email, "admin@example.com");
    }
}
