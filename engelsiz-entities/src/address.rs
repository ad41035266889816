use itertools::Itertools;

/// Literal suffix of a neighborhood name in Turkish addresses.
pub const NEIGHBORHOOD_SUFFIX: &str = "Mahallesi";

/// Address as entered by a reporter.
///
/// All parts are optional and may be empty. The structured parts
/// take precedence over the free `raw` text.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub building_number : String,
    pub street          : String,
    pub neighborhood    : String,
    pub raw             : String,
}

impl Address {
    pub fn is_structured(&self) -> bool {
        !(self.building_number.trim().is_empty()
            && self.street.trim().is_empty()
            && self.neighborhood.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.is_structured() && self.raw.trim().is_empty()
    }

    /// Street and building number, e.g. "Bağdat Cad. No:120".
    ///
    /// Falls back to the raw address text if no structured part
    /// has been entered.
    pub fn street_line(&self) -> Option<String> {
        if !self.is_structured() {
            return non_empty(&self.raw).map(ToOwned::to_owned);
        }
        match (non_empty(&self.street), non_empty(&self.building_number)) {
            (Some(street), Some(nr)) => Some(format!("{street} No:{nr}")),
            (Some(street), None) => Some(street.to_owned()),
            (None, Some(nr)) => Some(format!("No:{nr}")),
            (None, None) => None,
        }
    }

    /// The neighborhood with its customary suffix, e.g. "Caferağa Mahallesi".
    pub fn neighborhood_line(&self) -> Option<String> {
        non_empty(&self.neighborhood).map(|n| format!("{n} {NEIGHBORHOOD_SUFFIX}"))
    }

    /// Single line for displaying the address.
    pub fn display_text(&self) -> Option<String> {
        if !self.is_structured() {
            return non_empty(&self.raw).map(ToOwned::to_owned);
        }
        let text = [self.street_line(), self.neighborhood_line()]
            .into_iter()
            .flatten()
            .join(", ");
        (!text.is_empty()).then_some(text)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
