pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{report_builder::*, user_builder::*};

pub mod report_builder {

    use super::*;
    use crate::{email::*, geo::*, id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: ObstacleReport,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn site_name(mut self, site_name: &str) -> Self {
            self.report.site_name = site_name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.report.city = city.into();
            self
        }
        pub fn district(mut self, district: &str) -> Self {
            self.report.district = district.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.report.pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self
        }
        pub fn obstacle_types(mut self, types: &[ObstacleType]) -> Self {
            self.report.obstacle_types = types.iter().copied().collect();
            self
        }
        pub fn submitter(mut self, id: &str, email: &str) -> Self {
            self.report.submitter = Some(Submitter {
                id: id.into(),
                email: email.parse::<EmailAddress>().unwrap(),
            });
            self
        }
        pub fn reported_at(mut self, reported_at: Timestamp) -> Self {
            self.report.reported_at = reported_at;
            self
        }
        pub fn verified(mut self, verified: bool) -> Self {
            self.report.verified = verified;
            self
        }
        pub fn finish(self) -> ObstacleReport {
            self.report
        }
    }

    impl Builder for ObstacleReport {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            ReportBuild {
                report: ObstacleReport {
                    id: Id::new(),
                    submitter: None,
                    site_name: "Test Plaza".into(),
                    address: None,
                    city: "İstanbul".into(),
                    district: "Kadıköy".into(),
                    pos: MapPoint::try_from_lat_lng_deg(40.99, 29.03).unwrap(),
                    obstacle_types: [ObstacleType::EntryDenied].into_iter().collect(),
                    description: None,
                    reported_at: Timestamp::now(),
                    verified: false,
                    report_count: 1,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse::<EmailAddress>().unwrap();
            self
        }
        pub fn password(mut self, plain: &str) -> Self {
            self.user.password = plain.parse::<Password>().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "Kurye".into(),
                    email: EmailAddress::new_unchecked("kurye@example.com".into()),
                    password: Password::from_hash(String::new()),
                    role: Role::Courier,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
