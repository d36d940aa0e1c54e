use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use cityrisk::chat::Category;
use cityrisk::data::DatasetStore;
use cityrisk::engine::{ChatEngine, HELP_REPLY};
use cityrisk::history::{ConversationStore, Role, Turn};

fn write_datasets(dir: &Path) {
    let fixtures: &[(&str, &str)] = &[
        (
            "flood.csv",
            "Zone,People Affected\nAdyar,5200\nVelachery,8900\nAnna Nagar,1100\n",
        ),
        ("accident.csv", "Zone,No. of Cases\nAdyar,310\nAnna Nagar,540\n"),
        ("crime_details.csv", "Zone,Total Crimes\nAdyar,820\nAnna Nagar,1140\n"),
        (
            "air_pollution.csv",
            "Zone,Avg. Value (µg/m³) or AQI\nAdyar,92\nAnna Nagar,138\n",
        ),
        ("heat.csv", "Area,Heatstroke Cases\nAdyar,14\nAnna Nagar,22\n"),
        ("population.csv", "Zone,Population\nAdyar,420000\nAnna Nagar,510000\n"),
        (
            "riskanalysis.csv",
            "Zone,Accident,Air Pollution,Flood,Heat,Crime,Population\nAdyar,2,1,3,1,2,2\n",
        ),
    ];
    for (name, body) in fixtures {
        std::fs::write(dir.join(name), body).unwrap();
    }
}

#[test]
fn conversation_flows_from_query_to_persisted_turns() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());
    let history_path = dir.path().join("history.json");

    let datasets = Arc::new(DatasetStore::load(dir.path()).unwrap());
    let engine = ChatEngine::new(datasets);
    let mut store = ConversationStore::load(&history_path);

    // Turn 1: a resolvable flood query.
    let time = "10:00 AM".to_string();
    store.append_turn("ravi", Turn::new_user("flood in Adyar".into(), time.clone()));
    let reply = engine.respond("flood in Adyar", time);
    assert_eq!(reply.category, Some(Category::Flood));
    assert_eq!(reply.zone.as_deref(), Some("Adyar"));
    store.append_turn("ravi", reply);
    store.persist().unwrap();

    // Turn 2: an unclassifiable query gets the help reply.
    let time = "10:01 AM".to_string();
    store.append_turn("ravi", Turn::new_user("how is the weather".into(), time.clone()));
    let reply = engine.respond("how is the weather", time);
    assert_eq!(reply.content, HELP_REPLY);
    store.append_turn("ravi", reply);
    store.persist().unwrap();

    // Reload: four turns, same order, tags intact.
    let reloaded = ConversationStore::load(&history_path);
    let turns = reloaded.turns("ravi").unwrap();
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].category, Some(Category::Flood));
    assert_eq!(turns[1].zone.as_deref(), Some("Adyar"));
    assert_eq!(turns[3].category, None);
    assert_eq!(turns[3].zone, None);
}

#[test]
fn users_keep_separate_histories() {
    let dir = TempDir::new().unwrap();
    let history_path = dir.path().join("history.json");

    let mut store = ConversationStore::load(&history_path);
    store.append_turn("ravi", Turn::new_user("crime stats".into(), "09:00 AM".into()));
    store.append_turn("meena", Turn::new_user("heat in adyar".into(), "09:05 AM".into()));
    store.persist().unwrap();

    let reloaded = ConversationStore::load(&history_path);
    assert_eq!(reloaded.turns("ravi").unwrap().len(), 1);
    assert_eq!(reloaded.turns("meena").unwrap().len(), 1);
    assert_eq!(reloaded.users(), vec!["meena", "ravi"]);
}

#[test]
fn legacy_list_shaped_history_resets_to_empty() {
    let dir = TempDir::new().unwrap();
    let history_path = dir.path().join("history.json");
    std::fs::write(
        &history_path,
        r#"[{"role": "user", "content": "old format", "time": "09:00 AM"}]"#,
    )
    .unwrap();

    let store = ConversationStore::load(&history_path);
    assert!(store.users().is_empty());

    // The reset store persists over the legacy file.
    store.persist().unwrap();
    let raw = std::fs::read_to_string(&history_path).unwrap();
    assert_eq!(raw.trim(), "{}");
}

#[test]
fn visuals_can_be_rederived_from_a_stored_turn() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());
    let datasets = Arc::new(DatasetStore::load(dir.path()).unwrap());
    let engine = ChatEngine::new(datasets.clone());

    let turn = engine.respond("risk factors in adyar", "10:00 AM".into());
    let (category, zone) = (turn.category.unwrap(), turn.zone.unwrap());

    // The stored tag alone is enough to rebuild the table and chart.
    let rows = datasets.rows_for_zone(category, &zone).unwrap();
    assert_eq!(rows.height(), 1);
    let profile = datasets.risk_profile(&zone).unwrap().unwrap();
    assert_eq!(profile.len(), 6);
    assert!(profile.iter().all(|(_, level)| (1..=3).contains(level)));
}
