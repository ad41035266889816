use super::*;

pub fn load_sections(connections: &sqlite::Connections) -> Result<Vec<Section>> {
    Ok(usecases::load_sections(&connections.shared()?)?)
}

pub fn load_sections_for_admin(
    connections: &sqlite::Connections,
    logged_in_email: Option<&str>,
) -> Result<Vec<Section>> {
    let db = connections.shared()?;
    usecases::authorize_admin(&db, logged_in_email)?;
    Ok(usecases::load_sections(&db)?)
}

pub fn update_section(
    connections: &sqlite::Connections,
    logged_in_email: Option<&str>,
    key: &str,
    update: &SectionUpdate,
) -> Result<Section> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let admin = usecases::authorize_admin(conn, logged_in_email)?;
        usecases::update_section(conn, &admin, key, update)
    })?)
}
