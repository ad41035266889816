use super::*;

#[get("/sections")]
pub fn get_sections(connections: sqlite::Connections) -> Result<json::PublicSections> {
    let sections = flows::load_sections(&connections)?
        .into_iter()
        .map(|s| (s.key.clone(), s.into()))
        .collect();
    Ok(Json(json::PublicSections {
        success: true,
        sections,
    }))
}
