use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "engelsiz.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub admin: Option<Admin>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
        timeout: Duration,
        country_codes: String,
    },
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Admin {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geocoding,
            webserver,
            gateway,
            admin,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                            timeout,
                            country_codes,
                        } = gateway.nominatim.ok_or_else(|| {
                            anyhow!("Missing 'nominatim' gateway configuration")
                        })?;
                        GeocodingGateway::Nominatim {
                            base_url,
                            user_agent,
                            timeout,
                            country_codes,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let admin = admin.map(|raw::Admin { name, email, password }| Admin {
            name: name.unwrap_or_else(|| "Admin".to_string()),
            email,
            password,
        });

        Ok(Self {
            db,
            webserver,
            geocoding,
            admin,
        })
    }
}
