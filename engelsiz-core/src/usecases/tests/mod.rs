use super::prelude::*;
use crate::RepoError;
use crate::gateways::geocode::{GeoCodingGateway, GeoQuery};
use std::{cell::RefCell, collections::VecDeque, result};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub reports: RefCell<Vec<ObstacleReport>>,
    pub sections: RefCell<Vec<Section>>,
    pub users: RefCell<Vec<User>>,
}

impl ReportRepo for MockDb {
    fn create_report(&self, report: &ObstacleReport) -> RepoResult<()> {
        if self.reports.borrow().iter().any(|r| r.id == report.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }

    fn get_report(&self, id: &str) -> RepoResult<ObstacleReport> {
        self.reports
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_reports(&self) -> RepoResult<Vec<ObstacleReport>> {
        let mut reports = self.reports.borrow().clone();
        reports.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        Ok(reports)
    }

    fn verified_reports(&self) -> RepoResult<Vec<ObstacleReport>> {
        let mut reports = self.all_reports()?;
        reports.retain(|r| r.verified);
        Ok(reports)
    }

    fn count_reports(&self) -> RepoResult<ReportCounts> {
        let reports = self.reports.borrow();
        let verified = reports.iter().filter(|r| r.verified).count() as u64;
        Ok(ReportCounts::new(verified, reports.len() as u64 - verified))
    }

    fn set_report_verified(&self, id: &str, verified: bool) -> RepoResult<usize> {
        let mut count = 0;
        for r in self
            .reports
            .borrow_mut()
            .iter_mut()
            .filter(|r| r.id.as_str() == id)
        {
            r.verified = verified;
            count += 1;
        }
        Ok(count)
    }

    fn delete_report(&self, id: &str) -> RepoResult<usize> {
        let mut reports = self.reports.borrow_mut();
        let len = reports.len();
        reports.retain(|r| r.id.as_str() != id);
        Ok(len - reports.len())
    }
}

impl SectionRepo for MockDb {
    fn create_section(&self, section: &Section) -> RepoResult<()> {
        if self.sections.borrow().iter().any(|s| s.key == section.key) {
            return Err(RepoError::AlreadyExists);
        }
        self.sections.borrow_mut().push(section.clone());
        Ok(())
    }

    fn get_section(&self, key: &str) -> RepoResult<Section> {
        self.sections
            .borrow()
            .iter()
            .find(|s| s.key == key)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_sections(&self) -> RepoResult<Vec<Section>> {
        let mut sections = self.sections.borrow().clone();
        sections.sort_by(|a, b| (&a.page, &a.key).cmp(&(&b.page, &b.key)));
        Ok(sections)
    }

    fn count_sections(&self) -> RepoResult<usize> {
        Ok(self.sections.borrow().len())
    }

    fn update_section(
        &self,
        key: &str,
        update: &SectionUpdate,
        updated_at: Timestamp,
    ) -> RepoResult<()> {
        let mut sections = self.sections.borrow_mut();
        let section = sections
            .iter_mut()
            .find(|s| s.key == key)
            .ok_or(RepoError::NotFound)?;
        if let Some(visible) = update.visible {
            section.visible = visible;
        }
        if let Some(content) = &update.content {
            section.content = content.clone();
        }
        section.updated_at = updated_at;
        Ok(())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

/// Records all queries and answers them with
/// the given results, one per query.
#[derive(Default)]
pub struct MockGeoGateway {
    pub queries: RefCell<Vec<GeoQuery>>,
    results: RefCell<VecDeque<Option<(f64, f64)>>>,
}

impl MockGeoGateway {
    pub fn with_results(results: Vec<Option<(f64, f64)>>) -> Self {
        Self {
            queries: RefCell::default(),
            results: RefCell::new(results.into()),
        }
    }
}

impl GeoCodingGateway for MockGeoGateway {
    fn resolve_query(&self, query: &GeoQuery) -> Option<(f64, f64)> {
        self.queries.borrow_mut().push(query.clone());
        self.results.borrow_mut().pop_front().flatten()
    }
}
