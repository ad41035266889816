use super::*;
use engelsiz_entities as e;

impl From<e::report::ObstacleReport> for Report {
    fn from(from: e::report::ObstacleReport) -> Self {
        let anonymous = from.is_anonymous();
        let e::report::ObstacleReport {
            id,
            submitter: _,
            site_name,
            address,
            city,
            district,
            pos,
            obstacle_types,
            description,
            reported_at,
            verified,
            report_count,
        } = from;
        Self {
            id: id.into(),
            site_name,
            address,
            city,
            district,
            latitude: pos.lat(),
            longitude: pos.lng(),
            obstacle_type: obstacle_types.to_string(),
            obstacle_types: obstacle_types.iter().map(|t| t.to_string()).collect(),
            description,
            reported_at: reported_at.to_rfc3339(),
            verified,
            report_count,
            anonymous,
        }
    }
}

impl From<e::report::ObstacleReport> for ModeratedReport {
    fn from(mut from: e::report::ObstacleReport) -> Self {
        let submitter = from.submitter.take();
        let (submitter_id, submitter_email) = match submitter {
            Some(e::report::Submitter { id, email }) => (Some(id.into()), Some(email.into_string())),
            None => (None, None),
        };
        let mut report = Report::from(from);
        report.anonymous = submitter_id.is_none();
        Self {
            report,
            submitter_id,
            submitter_email,
        }
    }
}

impl From<e::report::ReportCounts> for ReportCounts {
    fn from(from: e::report::ReportCounts) -> Self {
        let e::report::ReportCounts {
            total,
            verified,
            pending,
        } = from;
        Self {
            total,
            verified,
            pending,
        }
    }
}

impl From<(e::report::ObstacleType, usize)> for ObstacleTypeCount {
    fn from((obstacle_type, count): (e::report::ObstacleType, usize)) -> Self {
        Self {
            obstacle_type: obstacle_type.to_string(),
            count,
        }
    }
}

impl From<e::section::Section> for Section {
    fn from(from: e::section::Section) -> Self {
        let e::section::Section {
            key,
            page,
            label,
            visible,
            content,
            updated_at,
        } = from;
        Self {
            key,
            page,
            label,
            visible,
            content,
            updated_at: updated_at.to_rfc3339(),
        }
    }
}

impl From<e::section::Section> for PublicSection {
    fn from(from: e::section::Section) -> Self {
        let e::section::Section {
            visible, content, ..
        } = from;
        Self { visible, content }
    }
}

impl From<SectionUpdate> for e::section::SectionUpdate {
    fn from(from: SectionUpdate) -> Self {
        let SectionUpdate { visible, content } = from;
        Self { visible, content }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Courier => UserRole::Courier,
            Admin => UserRole::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            password: _password,
            role,
            created_at: _,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            role: role.into(),
        }
    }
}
