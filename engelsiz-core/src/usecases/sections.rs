use super::{prelude::*, Admin};

pub fn load_sections<R: SectionRepo>(repo: &R) -> Result<Vec<Section>> {
    Ok(repo.all_sections()?)
}

/// Apply a partial update and return the modified section.
pub fn update_section<R: SectionRepo>(
    repo: &R,
    admin: &Admin,
    key: &str,
    update: &SectionUpdate,
) -> Result<Section> {
    repo.update_section(key, update, Timestamp::now())?;
    log::info!("{} updated section '{key}'", admin.email());
    Ok(repo.get_section(key)?)
}

/// Insert the given sections unless there are any sections yet.
///
/// Returns the number of created sections.
pub fn create_initial_sections<R: SectionRepo>(repo: &R, sections: &[Section]) -> Result<usize> {
    if repo.count_sections()? > 0 {
        return Ok(0);
    }
    for section in sections {
        repo.create_section(section)?;
    }
    log::info!("Created {} initial sections", sections.len());
    Ok(sections.len())
}
