use super::*;

pub fn load_public_reports(connections: &sqlite::Connections) -> Result<usecases::PublicReports> {
    Ok(usecases::load_public_reports(&connections.shared()?)?)
}

pub fn load_all_reports(
    connections: &sqlite::Connections,
    logged_in_email: Option<&str>,
) -> Result<Vec<ObstacleReport>> {
    let db = connections.shared()?;
    let admin = usecases::authorize_admin(&db, logged_in_email)?;
    Ok(usecases::load_all_reports(&db, &admin)?)
}

pub fn review_report(
    connections: &sqlite::Connections,
    logged_in_email: Option<&str>,
    id: &str,
    verified: bool,
) -> Result<usize> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let admin = usecases::authorize_admin(conn, logged_in_email)?;
        usecases::review_report(conn, &admin, id, verified).map_err(|err| {
            warn!("Failed to review report {id}: {err}");
            err
        })
    })?)
}

pub fn delete_report(
    connections: &sqlite::Connections,
    logged_in_email: Option<&str>,
    id: &str,
) -> Result<usize> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let admin = usecases::authorize_admin(conn, logged_in_email)?;
        usecases::delete_report(conn, &admin, id).map_err(|err| {
            warn!("Failed to delete report {id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    const ADMIN: Option<&str> = Some("admin@example.com");
    const COURIER: Option<&str> = Some("kurye@example.com");

    fn fixture() -> BackendFixture {
        let fixture = BackendFixture::new();
        fixture.create_user("admin@example.com", Role::Admin);
        fixture.create_user("kurye@example.com", Role::Courier);
        fixture
    }

    #[test]
    fn moderation_life_cycle() {
        let fixture = fixture();
        let id = fixture.create_report(ObstacleReport::build().finish());

        let public = flows::load_public_reports(&fixture.db_connections).unwrap();
        assert!(public.reports.is_empty());
        assert_eq!(public.counts, ReportCounts::new(0, 1));

        assert_eq!(
            flows::review_report(&fixture.db_connections, ADMIN, &id, true).unwrap(),
            1
        );
        let public = flows::load_public_reports(&fixture.db_connections).unwrap();
        assert_eq!(public.reports.len(), 1);
        assert_eq!(public.counts, ReportCounts::new(1, 0));

        assert_eq!(
            flows::delete_report(&fixture.db_connections, ADMIN, &id).unwrap(),
            1
        );
        let public = flows::load_public_reports(&fixture.db_connections).unwrap();
        assert!(public.reports.is_empty());
        assert_eq!(public.counts, ReportCounts::default());
    }

    #[test]
    fn only_admins_may_moderate() {
        let fixture = fixture();
        let id = fixture.create_report(ObstacleReport::build().finish());

        let err = flows::review_report(&fixture.db_connections, COURIER, &id, true).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));
        let err = flows::delete_report(&fixture.db_connections, None, &id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));
        assert!(flows::load_all_reports(&fixture.db_connections, COURIER).is_err());

        let all = flows::load_all_reports(&fixture.db_connections, ADMIN).unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].verified);
    }

    #[test]
    fn moderate_unknown_reports() {
        let fixture = fixture();
        assert_eq!(
            flows::review_report(&fixture.db_connections, ADMIN, "unknown", false).unwrap(),
            0
        );
        assert_eq!(
            flows::delete_report(&fixture.db_connections, ADMIN, "unknown").unwrap(),
            0
        );
    }
}
