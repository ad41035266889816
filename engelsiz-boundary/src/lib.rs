use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Arbitrary JSON object.
pub type JsonObject = Map<String, Value>;

#[rustfmt::skip]
#[derive(Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase", default)]
pub struct NewReport {
    pub site_name        : Option<String>,
    pub address          : Option<String>,
    pub building_number  : Option<String>,
    pub street           : Option<String>,
    pub neighborhood     : Option<String>,
    pub city             : Option<String>,
    pub district         : Option<String>,
    /// Single tag or comma separated list of tags.
    pub obstacle_type    : Option<String>,
    /// Takes precedence over `obstacle_type` if not empty.
    /// Anything but an array of strings is ignored.
    #[serde(deserialize_with = "deserialize_tag_list")]
    pub obstacle_types   : Vec<String>,
    pub description      : Option<String>,
    /// Compared literally with `captcha_expected`, any JSON type.
    pub captcha_answer   : Value,
    pub captcha_expected : Value,
}

impl NewReport {
    /// The submitted obstacle type tags, empty ones removed.
    pub fn obstacle_type_tags(&self) -> Vec<&str> {
        let tags: Vec<&str> = self
            .obstacle_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if !tags.is_empty() {
            return tags;
        }
        self.obstacle_type
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn deserialize_tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => vec![],
    };
    Ok(tags)
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReportCreated {
    pub success: bool,
    pub message: String,
    pub report_id: String,
    pub anonymous: bool,
}

#[rustfmt::skip]
#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id             : String,
    pub site_name      : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address        : Option<String>,
    pub city           : String,
    pub district       : String,
    pub latitude       : f64,
    pub longitude      : f64,
    /// Comma separated tags.
    pub obstacle_type  : String,
    pub obstacle_types : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description    : Option<String>,
    /// RFC 3339
    pub reported_at    : String,
    pub verified       : bool,
    pub report_count   : u32,
    pub anonymous      : bool,
}

/// A report as seen by moderators.
#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ModeratedReport {
    #[serde(flatten)]
    pub report: Report,
    pub submitter_id: Option<String>,
    pub submitter_email: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct ReportCounts {
    pub total: u64,
    pub verified: u64,
    pub pending: u64,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct ObstacleTypeCount {
    pub obstacle_type: String,
    pub count: usize,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PublicReports {
    pub success: bool,
    pub reports: Vec<Report>,
    pub counts: ReportCounts,
    pub obstacle_types: Vec<ObstacleTypeCount>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ModeratedReports {
    pub success: bool,
    pub reports: Vec<ModeratedReport>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct ReportReview {
    pub verified: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub const fn new() -> Self {
        Self { success: true }
    }
}

impl Default for Success {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PublicSection {
    pub visible: bool,
    pub content: JsonObject,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PublicSections {
    pub success: bool,
    pub sections: BTreeMap<String, PublicSection>,
}

#[rustfmt::skip]
#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub key        : String,
    pub page       : String,
    pub label      : String,
    pub visible    : bool,
    pub content    : JsonObject,
    /// RFC 3339
    pub updated_at : String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Sections {
    pub success: bool,
    pub sections: Vec<Section>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SectionUpdated {
    pub success: bool,
    pub section: Section,
}

#[derive(Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SectionUpdate {
    pub visible: Option<bool>,
    pub content: Option<JsonObject>,
}

#[derive(Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Courier,
    Admin,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CurrentUser {
    pub user: Option<User>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub success: bool,
    pub error: String,
}
