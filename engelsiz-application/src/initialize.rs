use super::*;
use engelsiz_db_sqlite::{initial_sections, run_embedded_database_migrations};

/// Prepare the database of a fresh or existing installation.
///
/// Safe to be run on every start: migrations, sections and
/// the admin account are only created if they are missing.
pub fn initialize_database(
    connections: &sqlite::Connections,
    admin: Option<usecases::NewUser>,
) -> Result<()> {
    run_embedded_database_migrations(connections.exclusive()?)?;
    let sections = initial_sections()?;
    connections
        .exclusive()?
        .transaction(|conn| usecases::create_initial_sections(conn, &sections))?;
    if let Some(admin) = admin {
        connections
            .exclusive()?
            .transaction(|conn| usecases::create_admin_if_missing(conn, admin))?;
    } else {
        debug!("No admin account configured");
    }
    Ok(())
}
