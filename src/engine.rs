// src/engine.rs
// Turns a free-text query into an assistant turn: classify the category,
// resolve the zone against that category's zone universe, build the reply.

use std::sync::Arc;

use crate::chat::{intent, resolver, Category};
use crate::data::DatasetStore;
use crate::history::Turn;

pub const HELP_REPLY: &str =
    "❓ Try asking about accidents, air pollution, crime, heat, flood, population, or risk.";
pub const INVALID_ZONE_REPLY: &str = "❗ Mention a valid zone.";

#[derive(Debug)]
pub struct ChatEngine {
    datasets: Arc<DatasetStore>,
}

impl ChatEngine {
    pub fn new(datasets: Arc<DatasetStore>) -> Self {
        Self { datasets }
    }

    /// Produce the assistant turn for `query`. `time` is shared with the
    /// user turn it answers.
    pub fn respond(&self, query: &str, time: String) -> Turn {
        let Some(category) = intent::classify(query) else {
            return Turn::new_assistant(HELP_REPLY.to_string(), time, None, None);
        };

        let candidates = match self.datasets.zones(category) {
            Ok(zones) => zones,
            Err(e) => {
                tracing::error!(category = category.label(), error = %e, "zone universe unavailable");
                Vec::new()
            }
        };
        let zone = resolver::resolve(query, &candidates);

        let content = match &zone {
            Some(zone) => reply_line(category, zone),
            None => INVALID_ZONE_REPLY.to_string(),
        };
        Turn::new_assistant(content, time, Some(category), zone)
    }
}

fn reply_line(category: Category, zone: &str) -> String {
    match category {
        Category::Flood => format!("🌊 Flood Data for {zone}"),
        Category::Accident => format!("🚧 Accidents in {zone}"),
        Category::Crime => format!("🚔 Crimes in {zone}"),
        Category::Pollution => format!("🌫 Air Quality in {zone}"),
        Category::Heat => format!("🥵 Heat Impact in {zone}"),
        Category::Population => format!("👥 Population in {zone}"),
        Category::Risk => format!("🚨 Risk Factors in {zone}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Role;

    fn engine() -> (tempfile::TempDir, ChatEngine) {
        let dir = tempfile::tempdir().unwrap();
        crate::data::tests::write_fixture_datasets(dir.path());
        let store = Arc::new(DatasetStore::load(dir.path()).unwrap());
        (dir, ChatEngine::new(store))
    }

    #[test]
    fn flood_query_resolves_category_and_zone() {
        let (_dir, engine) = engine();
        let turn = engine.respond("flood in Adyar", "10:00 AM".into());
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.category, Some(Category::Flood));
        assert_eq!(turn.zone.as_deref(), Some("Adyar"));
        assert_eq!(turn.content, "🌊 Flood Data for Adyar");
    }

    #[test]
    fn unclassified_query_gets_the_help_reply() {
        let (_dir, engine) = engine();
        let turn = engine.respond("how is the weather", "10:00 AM".into());
        assert_eq!(turn.category, None);
        assert_eq!(turn.zone, None);
        assert_eq!(turn.content, HELP_REPLY);
    }

    #[test]
    fn unresolvable_zone_keeps_the_category_tag() {
        let (_dir, engine) = engine();
        let turn = engine.respond("crime in atlantis", "10:00 AM".into());
        assert_eq!(turn.category, Some(Category::Crime));
        assert_eq!(turn.zone, None);
        assert_eq!(turn.content, INVALID_ZONE_REPLY);
    }

    #[test]
    fn heat_queries_resolve_against_the_area_column() {
        let (_dir, engine) = engine();
        let turn = engine.respond("temperature in velachery", "10:00 AM".into());
        assert_eq!(turn.category, Some(Category::Heat));
        assert_eq!(turn.zone.as_deref(), Some("Velachery"));
    }

    #[test]
    fn misspelled_query_resolves_through_fuzzy_steps() {
        let (_dir, engine) = engine();
        let turn = engine.respond("accidnt in adyr", "10:00 AM".into());
        assert_eq!(turn.category, Some(Category::Accident));
        assert_eq!(turn.zone.as_deref(), Some("Adyar"));
    }
}
