//! Game and Organizer: the records a tournament references.

use serde::{Deserialize, Serialize};

/// Document id as stored (opaque string).
pub type DocumentId = String;

/// A game title tournaments are played in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub game_name: String,
    /// Banner image URL shown on the tournament page.
    #[serde(default)]
    pub game_banner_photo: Option<String>,
    /// Long description of the game.
    #[serde(default)]
    pub profile: Option<String>,
}

/// The organization hosting a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub banner_photo: Option<String>,
}
