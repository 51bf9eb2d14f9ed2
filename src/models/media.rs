use serde::{Deserialize, Serialize};

use super::Document;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Document for Media {
    const ENTITY_NAME: &'static str = "media";
    const COLLECTION: &'static str = "media";
    const FIELDS: &'static [&'static str] = &["id", "caption", "description", "location"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
