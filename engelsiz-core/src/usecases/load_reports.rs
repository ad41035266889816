use super::{prelude::*, Admin};
use strum::IntoEnumIterator;

/// Everything the public map shows.
#[derive(Debug, Clone)]
pub struct PublicReports {
    /// Verified reports, newest first.
    pub reports: Vec<ObstacleReport>,
    /// Counted over all reports, including pending ones.
    pub counts: ReportCounts,
    /// Number of verified reports per obstacle type.
    pub obstacle_types: Vec<(ObstacleType, usize)>,
}

pub fn load_public_reports<R: ReportRepo>(repo: &R) -> Result<PublicReports> {
    let reports = repo.verified_reports()?;
    let counts = repo.count_reports()?;
    let obstacle_types = count_obstacle_types(&reports);
    Ok(PublicReports {
        reports,
        counts,
        obstacle_types,
    })
}

pub fn load_all_reports<R: ReportRepo>(repo: &R, _: &Admin) -> Result<Vec<ObstacleReport>> {
    Ok(repo.all_reports()?)
}

/// Occurrences of every obstacle type, in declaration order.
pub fn count_obstacle_types(reports: &[ObstacleReport]) -> Vec<(ObstacleType, usize)> {
    ObstacleType::iter()
        .map(|t| {
            let count = reports
                .iter()
                .filter(|r| r.obstacle_types.contains(t))
                .count();
            (t, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use engelsiz_entities::builders::*;

    #[test]
    fn load_only_verified_reports_but_count_all() {
        let db = MockDb::default();
        db.reports.borrow_mut().extend([
            ObstacleReport::build()
                .id("a")
                .reported_at(Timestamp::from_millis(1_000))
                .verified(true)
                .finish(),
            ObstacleReport::build()
                .id("b")
                .reported_at(Timestamp::from_millis(3_000))
                .finish(),
            ObstacleReport::build()
                .id("c")
                .reported_at(Timestamp::from_millis(2_000))
                .verified(true)
                .obstacle_types(&[ObstacleType::HelmetRemoval, ObstacleType::EntryDenied])
                .finish(),
        ]);
        let public = load_public_reports(&db).unwrap();
        let ids: Vec<_> = public.reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
        assert_eq!(public.counts, ReportCounts::new(2, 1));
        assert_eq!(public.counts.total, public.counts.verified + public.counts.pending);
        assert_eq!(public.obstacle_types[0], (ObstacleType::EntryDenied, 2));
        assert!(public
            .obstacle_types
            .contains(&(ObstacleType::HelmetRemoval, 1)));
        assert!(public.obstacle_types.contains(&(ObstacleType::Other, 0)));
    }

    #[test]
    fn count_every_obstacle_type() {
        let counts = count_obstacle_types(&[]);
        assert_eq!(counts.len(), <ObstacleType as strum::EnumCount>::COUNT);
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }
}
