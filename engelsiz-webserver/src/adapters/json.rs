pub use engelsiz_boundary::*;

use engelsiz_core::{entities as e, usecases};
use rocket::serde::json::Value;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    /// Unknown obstacle type tags are dropped, a report without
    /// any known tag is rejected later on as incomplete.
    pub fn new_report(r: NewReport) -> usecases::NewReport {
        let obstacle_types = r
            .obstacle_type_tags()
            .into_iter()
            .filter_map(|tag| {
                tag.parse::<e::ObstacleType>()
                    .inspect_err(|_| debug!("Ignoring unknown obstacle type '{tag}'"))
                    .ok()
            })
            .collect();
        let NewReport {
            site_name,
            address,
            building_number,
            street,
            neighborhood,
            city,
            district,
            obstacle_type: _,
            obstacle_types: _,
            description,
            captcha_answer,
            captcha_expected,
        } = r;
        let address = e::Address {
            building_number: building_number.unwrap_or_default(),
            street: street.unwrap_or_default(),
            neighborhood: neighborhood.unwrap_or_default(),
            raw: address.unwrap_or_default(),
        };
        usecases::NewReport {
            site_name: site_name.unwrap_or_default(),
            address,
            city: city.unwrap_or_default(),
            district: district.unwrap_or_default(),
            obstacle_types,
            description,
            captcha: usecases::CaptchaAnswer {
                answer: captcha_text(&captcha_answer),
                expected: captcha_text(&captcha_expected),
            },
        }
    }

    /// Numbers are compared by value (`7 == 7.0`), everything
    /// else by its JSON text (`"7" != 7`).
    fn captcha_text(value: &Value) -> String {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(|f| f.to_string())
                .unwrap_or_else(|| n.to_string()),
            _ => value.to_string(),
        }
    }

    pub fn new_user(u: NewUser) -> usecases::NewUser {
        let NewUser {
            name,
            email,
            password,
        } = u;
        usecases::NewUser {
            name,
            email,
            password,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn public_reports(from: usecases::PublicReports) -> PublicReports {
        let usecases::PublicReports {
            reports,
            counts,
            obstacle_types,
        } = from;
        PublicReports {
            success: true,
            reports: reports.into_iter().map(Into::into).collect(),
            counts: counts.into(),
            obstacle_types: obstacle_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn report_created(report: &e::ObstacleReport) -> ReportCreated {
        let message = match &report.submitter {
            Some(submitter) => format!("Your report has been saved as {}", submitter.email),
            None => "Your report has been saved anonymously".to_string(),
        };
        ReportCreated {
            success: true,
            message,
            report_id: report.id.to_string(),
            anonymous: report.is_anonymous(),
        }
    }
}
