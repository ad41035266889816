use super::*;

impl ReportRepo for DbReadOnly<'_> {
    fn create_report(&self, _report: &ObstacleReport) -> Result<()> {
        Err(read_only_err())
    }
    fn get_report(&self, id: &str) -> Result<ObstacleReport> {
        get_report(&mut self.conn.borrow_mut(), id)
    }

    fn all_reports(&self) -> Result<Vec<ObstacleReport>> {
        load_reports(&mut self.conn.borrow_mut(), false)
    }
    fn verified_reports(&self) -> Result<Vec<ObstacleReport>> {
        load_reports(&mut self.conn.borrow_mut(), true)
    }
    fn count_reports(&self) -> Result<ReportCounts> {
        count_reports(&mut self.conn.borrow_mut())
    }

    fn set_report_verified(&self, _id: &str, _verified: bool) -> Result<usize> {
        Err(read_only_err())
    }
    fn delete_report(&self, _id: &str) -> Result<usize> {
        Err(read_only_err())
    }
}

impl ReportRepo for DbConnection<'_> {
    fn create_report(&self, report: &ObstacleReport) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn get_report(&self, id: &str) -> Result<ObstacleReport> {
        get_report(&mut self.conn.borrow_mut(), id)
    }

    fn all_reports(&self) -> Result<Vec<ObstacleReport>> {
        load_reports(&mut self.conn.borrow_mut(), false)
    }
    fn verified_reports(&self) -> Result<Vec<ObstacleReport>> {
        load_reports(&mut self.conn.borrow_mut(), true)
    }
    fn count_reports(&self) -> Result<ReportCounts> {
        count_reports(&mut self.conn.borrow_mut())
    }

    fn set_report_verified(&self, id: &str, verified: bool) -> Result<usize> {
        set_report_verified(&mut self.conn.borrow_mut(), id, verified)
    }
    fn delete_report(&self, id: &str) -> Result<usize> {
        delete_report(&mut self.conn.borrow_mut(), id)
    }
}

fn create_report(conn: &mut SqliteConnection, r: &ObstacleReport) -> Result<()> {
    let (lat, lng) = r.pos.to_lat_lng_deg();
    let new_report = models::NewReport {
        id: r.id.as_str(),
        submitter_id: r.submitter.as_ref().map(|s| s.id.as_str()),
        submitter_email: r.submitter.as_ref().map(|s| s.email.as_str()),
        site_name: &r.site_name,
        address: r.address.as_deref(),
        city: &r.city,
        district: &r.district,
        lat,
        lng,
        obstacle_types: r.obstacle_types.to_string(),
        description: r.description.as_deref(),
        reported_at: r.reported_at.as_millis(),
        verified: r.verified,
        report_count: i32::try_from(r.report_count).map_err(anyhow::Error::from)?,
    };
    diesel::insert_into(schema::reports::table)
        .values(&new_report)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_report(conn: &mut SqliteConnection, id: &str) -> Result<ObstacleReport> {
    use schema::reports::dsl;
    let entity = dsl::reports
        .find(id)
        .first::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?;
    report_from_entity(entity)
}

fn load_reports(conn: &mut SqliteConnection, verified_only: bool) -> Result<Vec<ObstacleReport>> {
    use schema::reports::dsl;
    let mut query = dsl::reports
        .order_by((dsl::reported_at.desc(), dsl::id))
        .into_boxed();
    if verified_only {
        query = query.filter(dsl::verified.eq(true));
    }
    query
        .load::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(report_from_entity)
        .collect()
}

fn count_reports(conn: &mut SqliteConnection) -> Result<ReportCounts> {
    use schema::reports::dsl;
    let total = dsl::reports
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let verified = dsl::reports
        .filter(dsl::verified.eq(true))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(verified <= total);
    Ok(ReportCounts::new(verified as u64, (total - verified) as u64))
}

fn set_report_verified(conn: &mut SqliteConnection, id: &str, verified: bool) -> Result<usize> {
    use schema::reports::dsl;
    diesel::update(dsl::reports.find(id))
        .set(dsl::verified.eq(verified))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn delete_report(conn: &mut SqliteConnection, id: &str) -> Result<usize> {
    use schema::reports::dsl;
    diesel::delete(dsl::reports.find(id))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn report_from_entity(entity: models::ReportEntity) -> Result<ObstacleReport> {
    let models::ReportEntity {
        id,
        submitter_id,
        submitter_email,
        site_name,
        address,
        city,
        district,
        lat,
        lng,
        obstacle_types,
        description,
        reported_at,
        verified,
        report_count,
    } = entity;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid position of report {id}: {err}"))?;
    let obstacle_types = obstacle_types
        .parse::<ObstacleTypes>()
        .map_err(|err| anyhow!("Invalid obstacle types of report {id}: {err}"))?;
    let submitter = match (submitter_id, submitter_email) {
        (Some(id), Some(email)) => Some(Submitter {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
        }),
        (None, None) => None,
        _ => {
            // Prevented by a table constraint
            log::warn!("Incomplete submitter of report {id}");
            None
        }
    };
    Ok(ObstacleReport {
        id: id.into(),
        submitter,
        site_name,
        address,
        city,
        district,
        pos,
        obstacle_types,
        description,
        reported_at: Timestamp::from_millis(reported_at),
        verified,
        report_count: u32::try_from(report_count).map_err(anyhow::Error::from)?,
    })
}
