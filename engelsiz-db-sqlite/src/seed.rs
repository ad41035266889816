use anyhow::Result as Fallible;
use engelsiz_core::entities::{Section, SectionContent, Timestamp};
use serde::Deserialize;

const INITIAL_SECTIONS_JSON: &str = include_str!("../seeds/sections.json");

#[derive(Deserialize)]
struct SeedSection {
    key: String,
    page: String,
    label: String,
    #[serde(default = "visible_by_default")]
    visible: bool,
    content: SectionContent,
}

const fn visible_by_default() -> bool {
    true
}

/// The bundled page sections of a fresh installation.
pub fn initial_sections() -> Fallible<Vec<Section>> {
    let seeds: Vec<SeedSection> = serde_json::from_str(INITIAL_SECTIONS_JSON)?;
    let now = Timestamp::now();
    Ok(seeds
        .into_iter()
        .map(|s| Section {
            key: s.key,
            page: s.page,
            label: s.label,
            visible: s.visible,
            content: s.content,
            updated_at: now,
        })
        .collect())
}
