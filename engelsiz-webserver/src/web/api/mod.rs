use std::{fmt::Display, result};

use engelsiz_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::sqlite,
};
use engelsiz_application::prelude as flows;
use engelsiz_core::usecases;

mod admin;
mod error;
mod reports;
mod sections;
mod users;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   reports   --- //
        reports::post_report,
        reports::get_reports,
        // ---   moderation   --- //
        admin::get_reports,
        admin::put_report,
        admin::delete_report,
        admin::get_sections,
        admin::put_section,
        // ---   sections   --- //
        sections::get_sections,
        // ---   users   --- //
        users::post_register,
        users::post_login,
        users::post_logout,
        users::get_current_user,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        success: false,
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
