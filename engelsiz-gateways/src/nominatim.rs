use std::time::Duration;

use anyhow::{bail, Result};
use engelsiz_core::gateways::geocode::{GeoCodingGateway, GeoQuery};
use serde::Deserialize;

/// Geocoding with the search API of a Nominatim server.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::blocking::Client,
    search_url: String,
    country_codes: String,
}

impl Nominatim {
    pub fn try_new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        country_codes: &str,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
            country_codes: country_codes.to_owned(),
        })
    }

    fn query_params<'a>(&'a self, query: &'a GeoQuery) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![
            ("format", "json"),
            ("limit", "1"),
            ("countrycodes", self.country_codes.as_str()),
        ];
        match query {
            GeoQuery::Structured {
                street,
                city,
                county,
            } => {
                params.extend(
                    [("street", street), ("city", city), ("county", county)]
                        .into_iter()
                        .filter(|(_, v)| !v.is_empty())
                        .map(|(k, v)| (k, v.as_str())),
                );
            }
            GeoQuery::FreeText(q) => params.push(("q", q.as_str())),
        }
        params
    }

    fn search(&self, query: &GeoQuery) -> Result<Option<(f64, f64)>> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&self.query_params(query))
            .send()?;
        if !response.status().is_success() {
            bail!("Unexpected response status {}", response.status());
        }
        let places: Vec<Place> = response.json()?;
        places.first().map(Place::lat_lng).transpose()
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_query(&self, query: &GeoQuery) -> Option<(f64, f64)> {
        match self.search(query) {
            Ok(Some(lat_lng)) => {
                log::debug!("Resolved {query} to {lat_lng:?}");
                Some(lat_lng)
            }
            Ok(None) => {
                log::debug!("Nothing found for {query}");
                None
            }
            Err(err) => {
                log::warn!("Failed to resolve {query}: {err}");
                None
            }
        }
    }
}

/// A single search result, coordinates are sent as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Place {
    fn lat_lng(&self) -> Result<(f64, f64)> {
        let lat = self.lat.trim().parse::<f64>()?;
        let lng = self.lon.trim().parse::<f64>()?;
        if lat.is_nan() || lng.is_nan() {
            bail!("Invalid coordinates ({}, {})", self.lat, self.lon);
        }
        Ok((lat, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominatim() -> Nominatim {
        Nominatim::try_new(
            "https://nominatim.example.org/",
            "Test/1.0",
            Duration::from_secs(5),
            "tr",
        )
        .unwrap()
    }

    #[test]
    fn search_url_without_duplicate_slashes() {
        assert_eq!(
            nominatim().search_url,
            "https://nominatim.example.org/search"
        );
    }

    #[test]
    fn free_text_query_params() {
        let gw = nominatim();
        let query = GeoQuery::FreeText("Kadıköy, İstanbul, Turkey".into());
        assert_eq!(
            gw.query_params(&query),
            vec![
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", "tr"),
                ("q", "Kadıköy, İstanbul, Turkey"),
            ]
        );
    }

    #[test]
    fn structured_query_params_skip_empty_fields() {
        let gw = nominatim();
        let query = GeoQuery::Structured {
            street: "120 Bağdat Cad.".into(),
            city: "İstanbul".into(),
            county: String::new(),
        };
        let params = gw.query_params(&query);
        assert!(params.contains(&("street", "120 Bağdat Cad.")));
        assert!(params.contains(&("city", "İstanbul")));
        assert!(!params.iter().any(|(k, _)| *k == "county"));
        assert!(!params.iter().any(|(k, _)| *k == "q"));
    }

    #[test]
    fn parse_search_results() {
        let json = r#"[{"place_id":1,"lat":"40.9876","lon":"29.0365","display_name":"Kadıköy"}]"#;
        let places: Vec<Place> = serde_json::from_str(json).unwrap();
        assert_eq!(places[0].lat_lng().unwrap(), (40.9876, 29.0365));
    }

    #[test]
    fn reject_unparseable_coordinates() {
        let place = Place {
            lat: "NaN".into(),
            lon: "29.0".into(),
        };
        assert!(place.lat_lng().is_err());
        let place = Place {
            lat: "north".into(),
            lon: "29.0".into(),
        };
        assert!(place.lat_lng().is_err());
    }
}
