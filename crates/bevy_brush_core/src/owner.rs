//! Player references for placed actors

use serde::{Deserialize, Serialize};

/// The player an actor is placed for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerReference {
    pub name: String,
    pub faction: String,
}

impl PlayerReference {
    pub fn new(name: impl Into<String>, faction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
        }
    }

    /// The neutral owner used for scenery and decorations
    pub fn neutral() -> Self {
        Self::new("Neutral", "allies")
    }
}

impl Default for PlayerReference {
    fn default() -> Self {
        Self::neutral()
    }
}
