use super::{prelude::*, Admin};

pub fn review_report<R>(repo: &R, admin: &Admin, id: &str, verified: bool) -> Result<usize>
where
    R: ReportRepo,
{
    let status = ModerationStatus::from(verified);
    log::info!(
        "{} changes the status of report {id} to {status:?}",
        admin.email()
    );
    let count = repo.set_report_verified(id, verified)?;
    if count == 0 {
        log::info!("No report with id {id} to review");
    }
    Ok(count)
}

pub fn delete_report<R>(repo: &R, admin: &Admin, id: &str) -> Result<usize>
where
    R: ReportRepo,
{
    let count = repo.delete_report(id)?;
    log::info!("{} deleted {count} report(s) with id {id}", admin.email());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{authorize_admin, tests::MockDb},
        *,
    };
    use engelsiz_entities::builders::*;

    fn db_with_admin() -> (MockDb, Admin) {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .email("admin@example.com")
                .role(Role::Admin)
                .finish(),
        );
        let admin = authorize_admin(&db, Some("admin@example.com")).unwrap();
        (db, admin)
    }

    #[test]
    fn verify_and_unverify_repeatedly() {
        let (db, admin) = db_with_admin();
        db.reports
            .borrow_mut()
            .push(ObstacleReport::build().id("r1").finish());
        for _ in 0..2 {
            assert_eq!(review_report(&db, &admin, "r1", true).unwrap(), 1);
            assert!(db.reports.borrow()[0].verified);
        }
        assert_eq!(db.count_reports().unwrap(), ReportCounts::new(1, 0));
        for _ in 0..2 {
            assert_eq!(review_report(&db, &admin, "r1", false).unwrap(), 1);
            assert!(!db.reports.borrow()[0].verified);
        }
        assert_eq!(db.count_reports().unwrap(), ReportCounts::new(0, 1));
    }

    #[test]
    fn review_and_delete_unknown_reports() {
        let (db, admin) = db_with_admin();
        assert_eq!(review_report(&db, &admin, "unknown", true).unwrap(), 0);
        assert_eq!(delete_report(&db, &admin, "unknown").unwrap(), 0);
    }

    #[test]
    fn delete_pending_and_verified_reports() {
        let (db, admin) = db_with_admin();
        db.reports.borrow_mut().extend([
            ObstacleReport::build().id("pending").finish(),
            ObstacleReport::build().id("verified").verified(true).finish(),
        ]);
        assert_eq!(delete_report(&db, &admin, "pending").unwrap(), 1);
        assert_eq!(delete_report(&db, &admin, "verified").unwrap(), 1);
        assert_eq!(delete_report(&db, &admin, "verified").unwrap(), 0);
        assert_eq!(db.count_reports().unwrap(), ReportCounts::default());
    }
}
