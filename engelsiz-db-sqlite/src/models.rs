#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reports)]
pub struct NewReport<'a> {
    pub id: &'a str,
    pub submitter_id: Option<&'a str>,
    pub submitter_email: Option<&'a str>,
    pub site_name: &'a str,
    pub address: Option<&'a str>,
    pub city: &'a str,
    pub district: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub obstacle_types: String,
    pub description: Option<&'a str>,
    pub reported_at: i64,
    pub verified: bool,
    pub report_count: i32,
}

#[derive(Queryable)]
pub struct ReportEntity {
    pub id: String,
    pub submitter_id: Option<String>,
    pub submitter_email: Option<String>,
    pub site_name: String,
    pub address: Option<String>,
    pub city: String,
    pub district: String,
    pub lat: f64,
    pub lng: f64,
    pub obstacle_types: String,
    pub description: Option<String>,
    pub reported_at: i64,
    pub verified: bool,
    pub report_count: i32,
}

#[derive(Insertable)]
#[diesel(table_name = sections)]
pub struct NewSection<'a> {
    pub key: &'a str,
    pub page: &'a str,
    pub label: &'a str,
    pub visible: bool,
    pub content: String,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct SectionEntity {
    pub key: String,
    pub page: String,
    pub label: String,
    pub visible: bool,
    pub content: String,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = sections)]
pub struct SectionChangeset {
    pub visible: Option<bool>,
    pub content: Option<String>,
    pub updated_at: i64,
}
