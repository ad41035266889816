use engelsiz_core::entities::SectionUpdate;

use super::*;

#[get("/admin/reports")]
pub fn get_reports(
    connections: sqlite::Connections,
    auth: Auth,
) -> Result<json::ModeratedReports> {
    let reports = flows::load_all_reports(&connections, auth.account_email())?;
    Ok(Json(json::ModeratedReports {
        success: true,
        reports: reports.into_iter().map(Into::into).collect(),
    }))
}

#[put("/admin/reports/<id>", format = "application/json", data = "<review>")]
pub fn put_report(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
    review: JsonResult<json::ReportReview>,
) -> Result<json::Success> {
    let json::ReportReview { verified } = review?.into_inner();
    flows::review_report(&connections, auth.account_email(), id, verified)?;
    Ok(Json(json::Success::new()))
}

#[delete("/admin/reports/<id>")]
pub fn delete_report(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::Success> {
    flows::delete_report(&connections, auth.account_email(), id)?;
    Ok(Json(json::Success::new()))
}

#[get("/admin/sections")]
pub fn get_sections(connections: sqlite::Connections, auth: Auth) -> Result<json::Sections> {
    let sections = flows::load_sections_for_admin(&connections, auth.account_email())?;
    Ok(Json(json::Sections {
        success: true,
        sections: sections.into_iter().map(Into::into).collect(),
    }))
}

#[put("/admin/sections/<key>", format = "application/json", data = "<update>")]
pub fn put_section(
    connections: sqlite::Connections,
    auth: Auth,
    key: &str,
    update: JsonResult<json::SectionUpdate>,
) -> Result<json::SectionUpdated> {
    let update: SectionUpdate = update?.into_inner().into();
    let section = flows::update_section(&connections, auth.account_email(), key, &update)?;
    Ok(Json(json::SectionUpdated {
        success: true,
        section: section.into(),
    }))
}
