#[macro_use]
extern crate log;

use std::sync::Arc;

use engelsiz_core::gateways::geocode::GeoCodingGateway;
use engelsiz_db_sqlite::Connections;

mod adapters;
mod web;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    geo_gw: Arc<dyn GeoCodingGateway + Send + Sync>,
) {
    web::run(connections.into(), enable_cors, geo_gw).await;
}
