use crate::time::Timestamp;

/// Arbitrary JSON object, the schema is defined by the page that renders it.
pub type SectionContent = serde_json::Map<String, serde_json::Value>;

/// Editable content block of a page.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key        : String,
    pub page       : String,
    pub label      : String,
    pub visible    : bool,
    pub content    : SectionContent,
    pub updated_at : Timestamp,
}

/// Partial modification of a section, `None` fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionUpdate {
    pub visible: Option<bool>,
    pub content: Option<SectionContent>,
}

impl SectionUpdate {
    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.content.is_none()
    }
}
