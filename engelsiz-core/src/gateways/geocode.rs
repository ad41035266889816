use std::fmt;

/// A single search request against a geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoQuery {
    /// Structured search with separate fields.
    Structured {
        street: String,
        city: String,
        county: String,
    },
    /// Free-form search text.
    FreeText(String),
}

impl fmt::Display for GeoQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Structured {
                street,
                city,
                county,
            } => write!(f, "street={street}, city={city}, county={county}"),
            Self::FreeText(q) => write!(f, "q={q}"),
        }
    }
}

pub trait GeoCodingGateway {
    /// Coordinates (latitude, longitude) of the best match.
    ///
    /// Implementations must swallow all errors and return `None`
    /// if the service could not be reached or did not find anything.
    fn resolve_query(&self, query: &GeoQuery) -> Option<(f64, f64)>;
}
