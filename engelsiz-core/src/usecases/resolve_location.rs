use super::prelude::*;
use crate::gateways::geocode::{GeoCodingGateway, GeoQuery};
use std::fmt;

/// Country name appended to free-text queries.
pub const COUNTRY_NAME: &str = "Turkey";

/// Minimum number of non-empty parts, including the country,
/// that make a free-text address query worth trying.
const MIN_ADDRESS_QUERY_PARTS: usize = 4;

/// Everything that is known about where a report was made.
#[derive(Debug, Clone, Copy)]
pub struct ReportLocation<'a> {
    pub site_name: &'a str,
    pub address: &'a Address,
    pub district: &'a str,
    pub city: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// Structured query with street, city and district.
    StructuredStreet,
    /// Full address as free text.
    AddressText,
    /// Name of the site within its district.
    SiteName,
    /// Center of the district.
    District,
}

impl ResolveStrategy {
    /// All strategies, the most specific first.
    pub const ALL: [Self; 4] = [
        Self::StructuredStreet,
        Self::AddressText,
        Self::SiteName,
        Self::District,
    ];

    /// The query of this strategy or `None` if the location
    /// does not provide enough information for it.
    pub fn query(self, location: &ReportLocation) -> Option<GeoQuery> {
        let ReportLocation {
            site_name,
            address,
            district,
            city,
        } = *location;
        match self {
            Self::StructuredStreet => {
                let street = format!(
                    "{} {}",
                    address.building_number.trim(),
                    address.street.trim()
                );
                let street = street.trim();
                if street.is_empty() {
                    return None;
                }
                Some(GeoQuery::Structured {
                    street: street.to_owned(),
                    city: city.trim().to_owned(),
                    county: district.trim().to_owned(),
                })
            }
            Self::AddressText => {
                let parts: Vec<_> = [
                    address.street_line(),
                    address.neighborhood_line(),
                    non_empty(district),
                    non_empty(city),
                    Some(COUNTRY_NAME.to_owned()),
                ]
                .into_iter()
                .flatten()
                .collect();
                (parts.len() >= MIN_ADDRESS_QUERY_PARTS)
                    .then(|| GeoQuery::FreeText(parts.join(", ")))
            }
            Self::SiteName => Some(free_text(&[site_name, district, city, COUNTRY_NAME])),
            Self::District => Some(free_text(&[district, city, COUNTRY_NAME])),
        }
    }
}

impl fmt::Display for ResolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::StructuredStreet => "structured street",
            Self::AddressText => "address text",
            Self::SiteName => "site name",
            Self::District => "district",
        };
        f.write_str(s)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

fn free_text(parts: &[&str]) -> GeoQuery {
    let text = parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    GeoQuery::FreeText(text)
}

/// Try all strategies in order until one yields a valid position.
///
/// Never fails: unreachable services, empty results and
/// implausible coordinates all count as "not found".
pub fn resolve_location<G>(
    gateway: &G,
    location: &ReportLocation,
) -> Option<(ResolveStrategy, MapPoint)>
where
    G: GeoCodingGateway + ?Sized,
{
    ResolveStrategy::ALL.into_iter().find_map(|strategy| {
        let query = strategy.query(location)?;
        log::debug!("Geocoding by {strategy}: {query}");
        let (lat, lng) = gateway.resolve_query(&query)?;
        match MapPoint::try_from_lat_lng_deg(lat, lng) {
            Ok(pos) => Some((strategy, pos)),
            Err(err) => {
                log::warn!("Discarding geocoding result of {strategy} query: {err}");
                None
            }
        }
    })
}
