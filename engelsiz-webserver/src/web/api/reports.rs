use std::sync::Arc;

use rocket::tokio::task::spawn_blocking;

use super::*;

#[post("/reports", data = "<new_report>")]
pub async fn post_report(
    connections: sqlite::Connections,
    auth: Auth,
    geo_gw: &State<GeoCoding>,
    new_report: JsonResult<'_, json::NewReport>,
) -> Result<json::ReportCreated> {
    let new_report = from_json::new_report(new_report?.into_inner());
    let geocoding = Arc::clone(&geo_gw.0);
    let logged_in_email = auth.into_account_email();
    // Geocoding requests are blocking
    let report = spawn_blocking(move || {
        flows::submit_report(
            &connections,
            &*geocoding,
            new_report,
            logged_in_email.as_deref(),
        )
    })
    .await??;
    Ok(Json(to_json::report_created(&report)))
}

#[get("/reports")]
pub fn get_reports(connections: sqlite::Connections) -> Result<json::PublicReports> {
    let reports = flows::load_public_reports(&connections)?;
    Ok(Json(to_json::public_reports(reports)))
}
