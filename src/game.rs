//! A small game save: collected shapes and the turns they were picked up on.
//!
//! [`GameData`] carries its map directly; [`JsonGameData`] is the shadow form
//! with plain string keys. Both encode to the same JSON.

use crate::config::UnknownKeyPolicy;
use crate::error::Result;
use crate::map::KeyedMap;
use crate::wire::WireDocument;
use serde::{Deserialize, Serialize};

crate::enum_key! {
    /// Geometric objects a player can collect.
    pub enum Shape {
        /// A circle.
        Circle,
        /// A line segment.
        Line,
        /// A triangle.
        Triangle,
        /// A square.
        Square,
        /// A pentagon.
        Pentagon,
        /// A hexagon.
        Hexagon,
    }
}

/// Save data keyed by [`Shape`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// Collected objects per shape, in pickup order.
    pub objects: KeyedMap<Shape>,
}

/// Wire mirror of [`GameData`] with string keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonGameData {
    /// Collected objects per shape label.
    pub objects: WireDocument,
}

impl JsonGameData {
    /// Convert to [`GameData`], applying `policy` to unknown labels.
    pub fn into_game_data(self, policy: UnknownKeyPolicy) -> Result<GameData> {
        Ok(GameData {
            objects: self.objects.into_keyed(policy)?,
        })
    }
}

impl From<&GameData> for JsonGameData {
    fn from(data: &GameData) -> Self {
        Self {
            objects: WireDocument::from(&data.objects),
        }
    }
}

impl TryFrom<JsonGameData> for GameData {
    type Error = crate::Error;

    fn try_from(wire: JsonGameData) -> Result<Self> {
        wire.into_game_data(UnknownKeyPolicy::Reject)
    }
}
