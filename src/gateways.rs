use std::sync::Arc;

use anyhow::Result;
use engelsiz_core::gateways::geocode::{GeoCodingGateway, GeoQuery};
use engelsiz_gateways::nominatim::Nominatim;

use crate::config;

pub fn geocoding_gateway(
    cfg: &config::Geocoding,
) -> Result<Arc<dyn GeoCodingGateway + Send + Sync>> {
    let gw: Arc<dyn GeoCodingGateway + Send + Sync> = match &cfg.gateway {
        Some(config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            timeout,
            country_codes,
        }) => {
            log::info!("Use Nominatim geocoding gateway ({base_url})");
            Arc::new(Nominatim::try_new(
                base_url,
                user_agent,
                *timeout,
                country_codes,
            )?)
        }
        None => {
            log::warn!("No geocoding gateway was configured: all reports get a random position");
            Arc::new(DummyGeoGw)
        }
    };
    Ok(gw)
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_query(&self, query: &GeoQuery) -> Option<(f64, f64)> {
        log::debug!("Cannot resolve {query} because no geocoding gateway was configured");
        None
    }
}
