use serde::{Deserialize, Serialize};

use super::Document;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Document for Album {
    const ENTITY_NAME: &'static str = "album";
    const COLLECTION: &'static str = "albums";
    const FIELDS: &'static [&'static str] = &["id", "name", "description"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
