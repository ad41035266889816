use super::{prelude::*, resolve_location, ReportLocation};
use crate::gateways::geocode::GeoCodingGateway;
use rand::Rng;

/// Positions of reports that could not be geocoded are
/// scattered randomly across this area.
pub const FALLBACK_AREA: MapBbox = MapBbox::from_origin_and_span(39.0, 28.0, 3.0, 8.0);

/// The answer to the security question together with the
/// expected solution, both in their canonical JSON form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaAnswer {
    pub answer: String,
    pub expected: String,
}

impl CaptchaAnswer {
    pub fn is_correct(&self) -> bool {
        self.answer == self.expected
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewReport {
    pub site_name      : String,
    pub address        : Address,
    pub city           : String,
    pub district       : String,
    pub obstacle_types : ObstacleTypes,
    pub description    : Option<String>,
    pub captcha        : CaptchaAnswer,
}

/// A new report that passed validation.
#[derive(Debug, Clone)]
pub struct ValidNewReport {
    site_name: String,
    address: Address,
    city: String,
    district: String,
    obstacle_types: ObstacleTypes,
    description: Option<String>,
}

impl ValidNewReport {
    pub fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            site_name: &self.site_name,
            address: &self.address,
            district: &self.district,
            city: &self.city,
        }
    }
}

/// Check the required fields first and then the security question.
pub fn validate_new_report(new_report: NewReport) -> Result<ValidNewReport> {
    let NewReport {
        site_name,
        address,
        city,
        district,
        obstacle_types,
        description,
        captcha,
    } = new_report;
    let site_name = site_name.trim();
    let city = city.trim();
    let district = district.trim();
    if site_name.is_empty() || city.is_empty() || district.is_empty() || obstacle_types.is_empty()
    {
        return Err(Error::MissingRequiredField);
    }
    if !captcha.is_correct() {
        return Err(Error::Captcha);
    }
    let description = description
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty());
    Ok(ValidNewReport {
        site_name: site_name.to_owned(),
        address,
        city: city.to_owned(),
        district: district.to_owned(),
        obstacle_types,
        description,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportPosition {
    Resolved(MapPoint),
    Fallback(MapPoint),
}

impl ReportPosition {
    pub const fn map_point(self) -> MapPoint {
        match self {
            Self::Resolved(pos) | Self::Fallback(pos) => pos,
        }
    }
}

pub fn fallback_position<R: Rng + ?Sized>(rng: &mut R) -> MapPoint {
    FALLBACK_AREA.interpolate(rng.gen(), rng.gen())
}

pub fn locate_new_report<G, R>(gateway: &G, report: &ValidNewReport, rng: &mut R) -> ReportPosition
where
    G: GeoCodingGateway + ?Sized,
    R: Rng + ?Sized,
{
    if let Some((strategy, pos)) = resolve_location(gateway, &report.location()) {
        log::debug!("Located '{}' by {strategy} at {pos}", report.site_name);
        return ReportPosition::Resolved(pos);
    }
    let pos = fallback_position(rng);
    log::warn!(
        "Could not locate '{}' in {}/{}: using random position {pos}",
        report.site_name,
        report.district,
        report.city
    );
    ReportPosition::Fallback(pos)
}

pub fn store_new_report<R: ReportRepo>(
    repo: &R,
    report: ValidNewReport,
    pos: MapPoint,
    submitter: Option<Submitter>,
) -> Result<ObstacleReport> {
    let ValidNewReport {
        site_name,
        address,
        city,
        district,
        obstacle_types,
        description,
    } = report;
    let report = ObstacleReport {
        id: Id::new(),
        submitter,
        site_name,
        address: address.display_text(),
        city,
        district,
        pos,
        obstacle_types,
        description,
        reported_at: Timestamp::now(),
        verified: false,
        report_count: 1,
    };
    repo.create_report(&report)?;
    log::info!(
        "Created new {} report {} for '{}'",
        if report.is_anonymous() {
            "anonymous"
        } else {
            "personal"
        },
        report.id,
        report.site_name
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{MockDb, MockGeoGateway},
        *,
    };
    use rand::{rngs::SmallRng, SeedableRng};

    fn new_report() -> NewReport {
        NewReport {
            site_name: "Moda Residence".into(),
            address: Address {
                building_number: "12".into(),
                street: "Moda Cad.".into(),
                neighborhood: "Caferağa".into(),
                raw: String::new(),
            },
            city: "İstanbul".into(),
            district: "Kadıköy".into(),
            obstacle_types: [ObstacleType::EntryDenied, ObstacleType::HelmetRemoval]
                .into_iter()
                .collect(),
            description: Some("  Only via the back door  ".into()),
            captcha: CaptchaAnswer {
                answer: "7".into(),
                expected: "7".into(),
            },
        }
    }

    #[test]
    fn missing_required_fields() {
        let mut r = new_report();
        r.site_name = " ".into();
        assert!(matches!(
            validate_new_report(r),
            Err(Error::MissingRequiredField)
        ));
        let mut r = new_report();
        r.district = String::new();
        assert!(matches!(
            validate_new_report(r),
            Err(Error::MissingRequiredField)
        ));
        let mut r = new_report();
        r.obstacle_types = ObstacleTypes::default();
        assert!(matches!(
            validate_new_report(r),
            Err(Error::MissingRequiredField)
        ));
    }

    #[test]
    fn missing_fields_are_reported_before_wrong_captcha() {
        let mut r = new_report();
        r.city = String::new();
        r.captcha.answer = "8".into();
        assert!(matches!(
            validate_new_report(r),
            Err(Error::MissingRequiredField)
        ));
    }

    #[test]
    fn wrong_captcha() {
        let mut r = new_report();
        r.captcha.answer = "\"7\"".into();
        assert!(matches!(validate_new_report(r), Err(Error::Captcha)));
    }

    #[test]
    fn fallback_positions_stay_inside_the_fallback_area() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let pos = fallback_position(&mut rng);
            assert!(FALLBACK_AREA.contains_point(pos));
            assert!((39.0..=42.0).contains(&pos.lat()));
            assert!((28.0..=36.0).contains(&pos.lng()));
        }
    }

    #[test]
    fn locate_by_geocoding() {
        let gw = MockGeoGateway::with_results(vec![Some((40.98, 29.03))]);
        let report = validate_new_report(new_report()).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let pos = locate_new_report(&gw, &report, &mut rng);
        assert_eq!(
            pos,
            ReportPosition::Resolved(MapPoint::try_from_lat_lng_deg(40.98, 29.03).unwrap())
        );
        assert_eq!(gw.queries.borrow().len(), 1);
    }

    #[test]
    fn locate_by_fallback() {
        let gw = MockGeoGateway::default();
        let report = validate_new_report(new_report()).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let pos = locate_new_report(&gw, &report, &mut rng);
        assert!(matches!(pos, ReportPosition::Fallback(_)));
        assert!(FALLBACK_AREA.contains_point(pos.map_point()));
        assert_eq!(gw.queries.borrow().len(), 4);
    }

    #[test]
    fn store_anonymous_report() {
        let db = MockDb::default();
        let report = validate_new_report(new_report()).unwrap();
        let pos = MapPoint::try_from_lat_lng_deg(40.98, 29.03).unwrap();
        let stored = store_new_report(&db, report, pos, None).unwrap();
        assert!(stored.is_anonymous());
        assert!(!stored.verified);
        assert_eq!(stored.report_count, 1);
        assert_eq!(
            stored.address.as_deref(),
            Some("Moda Cad. No:12, Caferağa Mahallesi")
        );
        assert_eq!(stored.description.as_deref(), Some("Only via the back door"));
        assert_eq!(db.reports.borrow().len(), 1);
        assert_eq!(db.reports.borrow()[0], stored);
    }

    #[test]
    fn store_personal_report() {
        let db = MockDb::default();
        let mut r = new_report();
        r.description = Some("   ".into());
        let report = validate_new_report(r).unwrap();
        let submitter = Submitter {
            id: "u1".into(),
            email: "kurye@example.com".parse().unwrap(),
        };
        let pos = MapPoint::try_from_lat_lng_deg(40.98, 29.03).unwrap();
        let stored = store_new_report(&db, report, pos, Some(submitter.clone())).unwrap();
        assert_eq!(stored.submitter, Some(submitter));
        assert!(stored.description.is_none());
    }
}
