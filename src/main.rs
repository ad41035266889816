use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use engelsiz_application::prelude as flows;
use engelsiz_core::usecases;
use engelsiz_db_sqlite::Connections;

mod config;
mod gateways;

#[derive(Parser, Debug)]
#[command(author, version, about = "Map of obstacles that couriers face on delivery", long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;
    run(cfg)
}

fn run(cfg: config::Config) -> Result<()> {
    let config::Config {
        db,
        webserver,
        geocoding,
        admin,
    } = cfg;

    log::info!("Connecting to SQLite database {}", db.conn_sqlite);
    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
    let admin = admin.map(|config::Admin { name, email, password }| usecases::NewUser {
        name,
        email,
        password,
    });
    flows::initialize_database(&connections, admin)?;

    // The blocking HTTP client must not be created within the async runtime
    let geo_gw = gateways::geocoding_gateway(&geocoding)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(engelsiz_webserver::run(
        connections,
        webserver.enable_cors,
        geo_gw,
    ));
    Ok(())
}
