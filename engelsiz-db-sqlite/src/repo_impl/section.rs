use super::*;

impl SectionRepo for DbReadOnly<'_> {
    fn create_section(&self, _section: &Section) -> Result<()> {
        Err(read_only_err())
    }
    fn get_section(&self, key: &str) -> Result<Section> {
        get_section(&mut self.conn.borrow_mut(), key)
    }
    fn all_sections(&self) -> Result<Vec<Section>> {
        all_sections(&mut self.conn.borrow_mut())
    }
    fn count_sections(&self) -> Result<usize> {
        count_sections(&mut self.conn.borrow_mut())
    }
    fn update_section(&self, _: &str, _: &SectionUpdate, _: Timestamp) -> Result<()> {
        Err(read_only_err())
    }
}

impl SectionRepo for DbConnection<'_> {
    fn create_section(&self, section: &Section) -> Result<()> {
        create_section(&mut self.conn.borrow_mut(), section)
    }
    fn get_section(&self, key: &str) -> Result<Section> {
        get_section(&mut self.conn.borrow_mut(), key)
    }
    fn all_sections(&self) -> Result<Vec<Section>> {
        all_sections(&mut self.conn.borrow_mut())
    }
    fn count_sections(&self) -> Result<usize> {
        count_sections(&mut self.conn.borrow_mut())
    }
    fn update_section(
        &self,
        key: &str,
        update: &SectionUpdate,
        updated_at: Timestamp,
    ) -> Result<()> {
        update_section(&mut self.conn.borrow_mut(), key, update, updated_at)
    }
}

fn create_section(conn: &mut SqliteConnection, s: &Section) -> Result<()> {
    let new_section = models::NewSection {
        key: &s.key,
        page: &s.page,
        label: &s.label,
        visible: s.visible,
        content: serde_json::to_string(&s.content).map_err(anyhow::Error::from)?,
        updated_at: s.updated_at.as_millis(),
    };
    diesel::insert_into(schema::sections::table)
        .values(&new_section)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_section(conn: &mut SqliteConnection, key: &str) -> Result<Section> {
    use schema::sections::dsl;
    let entity = dsl::sections
        .find(key)
        .first::<models::SectionEntity>(conn)
        .map_err(from_diesel_err)?;
    section_from_entity(entity)
}

fn all_sections(conn: &mut SqliteConnection) -> Result<Vec<Section>> {
    use schema::sections::dsl;
    dsl::sections
        .order_by((dsl::page, dsl::key))
        .load::<models::SectionEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(section_from_entity)
        .collect()
}

fn count_sections(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::sections::dsl;
    Ok(dsl::sections
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn update_section(
    conn: &mut SqliteConnection,
    key: &str,
    update: &SectionUpdate,
    updated_at: Timestamp,
) -> Result<()> {
    use schema::sections::dsl;
    let content = update
        .content
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(anyhow::Error::from)?;
    let changeset = models::SectionChangeset {
        visible: update.visible,
        content,
        updated_at: updated_at.as_millis(),
    };
    let count = diesel::update(dsl::sections.find(key))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn section_from_entity(entity: models::SectionEntity) -> Result<Section> {
    let models::SectionEntity {
        key,
        page,
        label,
        visible,
        content,
        updated_at,
    } = entity;
    let content = serde_json::from_str(&content)
        .map_err(|err| anyhow!("Invalid content of section '{key}': {err}"))?;
    Ok(Section {
        key,
        page,
        label,
        visible,
        content,
        updated_at: Timestamp::from_millis(updated_at),
    })
}
