use std::sync::Arc;

use engelsiz_core::gateways::geocode::GeoCodingGateway;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;
    let Gateways { geocoding } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);

    let mut instance = r.manage(db).manage(geo_gw);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let gateways = Gateways { geocoding };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    info!("Starting web server");
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
