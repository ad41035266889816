use super::*;
use engelsiz_core::gateways::geocode::GeoCodingGateway;

/// Validate, locate and store a new report.
///
/// Geocoding happens between validation and the write
/// transaction and never holds a database connection.
pub fn submit_report(
    connections: &sqlite::Connections,
    geocoding: &dyn GeoCodingGateway,
    new_report: usecases::NewReport,
    logged_in_email: Option<&str>,
) -> Result<ObstacleReport> {
    let report = usecases::validate_new_report(new_report).inspect_err(|err| {
        debug!("Rejecting invalid report: {err}");
    })?;
    let submitter = usecases::load_logged_in_user(&connections.shared()?, logged_in_email)?
        .map(|user| Submitter {
            id: user.id,
            email: user.email,
        });
    let pos = usecases::locate_new_report(geocoding, &report, &mut rand::thread_rng());
    let report = connections.exclusive()?.transaction(|conn| {
        usecases::store_new_report(conn, report, pos.map_point(), submitter).map_err(|err| {
            warn!("Failed to store new report: {err}");
            err
        })
    })?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_report() -> usecases::NewReport {
        usecases::NewReport {
            site_name: "Moda Residence".into(),
            address: Address {
                street: "Moda Cad.".into(),
                building_number: "12".into(),
                ..Default::default()
            },
            city: "İstanbul".into(),
            district: "Kadıköy".into(),
            obstacle_types: [ObstacleType::FreightElevatorOnly].into_iter().collect(),
            description: None,
            captcha: usecases::CaptchaAnswer {
                answer: "12".into(),
                expected: "12".into(),
            },
        }
    }

    #[test]
    fn submit_anonymous_report_with_resolved_location() {
        let fixture = BackendFixture::new();
        let geo = MockGeoGateway::with_results(vec![Some((40.98, 29.03))]);
        let report = flows::submit_report(&fixture.db_connections, &geo, new_report(), None).unwrap();
        assert!(report.is_anonymous());
        assert_eq!(report.pos.to_lat_lng_deg(), (40.98, 29.03));
        assert_eq!(geo.query_count(), 1);

        let stored = fixture.db_connections.shared().unwrap().get_report(report.id.as_str()).unwrap();
        assert_eq!(stored, report);
        assert!(!stored.verified);
        assert_eq!(stored.report_count, 1);
    }

    #[test]
    fn submit_report_with_fallback_position() {
        let fixture = BackendFixture::new();
        let geo = MockGeoGateway::default();
        let report = flows::submit_report(&fixture.db_connections, &geo, new_report(), None).unwrap();
        assert_eq!(geo.query_count(), 4);
        assert!(usecases::FALLBACK_AREA.contains_point(report.pos));
    }

    #[test]
    fn submit_personal_report() {
        let fixture = BackendFixture::new();
        fixture.create_user("kurye@example.com", Role::Courier);
        let geo = MockGeoGateway::default();
        let report = flows::submit_report(
            &fixture.db_connections,
            &geo,
            new_report(),
            Some("kurye@example.com"),
        )
        .unwrap();
        let submitter = report.submitter.unwrap();
        assert_eq!(submitter.email.as_str(), "kurye@example.com");
    }

    #[test]
    fn reject_invalid_reports_before_geocoding() {
        let fixture = BackendFixture::new();
        let geo = MockGeoGateway::default();

        let mut r = new_report();
        r.site_name = String::new();
        let err = flows::submit_report(&fixture.db_connections, &geo, r, None).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::MissingRequiredField))
        ));

        let mut r = new_report();
        r.captcha.answer = "13".into();
        let err = flows::submit_report(&fixture.db_connections, &geo, r, None).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Captcha))
        ));

        assert_eq!(geo.query_count(), 0);
        assert_eq!(
            fixture.db_connections.shared().unwrap().count_reports().unwrap(),
            ReportCounts::default()
        );
    }
}
