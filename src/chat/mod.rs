// src/chat/mod.rs
// Query understanding: the seven risk categories, the keyword intent
// classifier, and the zone resolver.

pub mod intent;
pub mod resolver;

use serde::{Deserialize, Serialize};

/// The seven fixed risk topics the assistant can discuss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flood,
    Accident,
    Crime,
    Pollution,
    Heat,
    Population,
    Risk,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Flood,
        Category::Accident,
        Category::Crime,
        Category::Pollution,
        Category::Heat,
        Category::Population,
        Category::Risk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Flood => "flood",
            Category::Accident => "accident",
            Category::Crime => "crime",
            Category::Pollution => "pollution",
            Category::Heat => "heat",
            Category::Population => "population",
            Category::Risk => "risk",
        }
    }
}
