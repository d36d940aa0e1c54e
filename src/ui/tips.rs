// src/ui/tips.rs
// Fixed precaution checklists per category; text is constant apart from the
// zone interpolation.

use crate::chat::Category;

pub fn precautions(category: Category, zone: &str) -> (&'static str, Vec<String>) {
    match category {
        Category::Flood => (
            "Flood",
            vec![
                "Avoid walking or driving through flood waters.".into(),
                "Relocate to higher ground in case of warnings.".into(),
                "Stay updated through official alerts.".into(),
                "Boil drinking water to avoid infections.".into(),
                "Keep emergency contacts and supplies ready.".into(),
            ],
        ),
        Category::Accident => (
            "Road Accidents",
            vec![
                format!("Drive carefully near {zone}."),
                "Follow all traffic signals and speed limits.".into(),
                "Wear helmet/seatbelt at all times.".into(),
                "Avoid using mobile phones while driving.".into(),
                "Stay alert in crowded intersections.".into(),
            ],
        ),
        Category::Crime => (
            "Crime",
            vec![
                format!("Avoid isolated areas in {zone}, especially at night."),
                "Always lock your doors and windows.".into(),
                "Report any suspicious activity to police.".into(),
                "Avoid sharing personal info with strangers.".into(),
                "Install safety apps or devices.".into(),
            ],
        ),
        Category::Pollution => (
            "Air Pollution",
            vec![
                format!("Wear a mask when outdoors in {zone}."),
                "Avoid outdoor exercise during peak hours.".into(),
                "Use air purifiers at home.".into(),
                "Stay indoors if you have respiratory issues.".into(),
                "Check AQI levels before planning activities.".into(),
            ],
        ),
        Category::Heat => (
            "Heat",
            vec![
                format!("Use an umbrella or cap in {zone}."),
                "Stay hydrated – drink plenty of water.".into(),
                "Avoid outdoor activities during noon.".into(),
                "Wear light and breathable clothes.".into(),
                "Apply sunscreen to protect from sunburn.".into(),
            ],
        ),
        Category::Population => (
            "Crowded Areas",
            vec![
                format!("Plan your commute to avoid traffic in {zone}."),
                "Stay aware of your surroundings in crowded places.".into(),
                "Avoid peak hours when possible.".into(),
                "Keep belongings safe to avoid theft.".into(),
                "Use masks in crowded areas for hygiene.".into(),
            ],
        ),
        Category::Risk => (
            "Overall Risk",
            vec![
                format!("Be aware of combined risk factors in {zone}."),
                "Follow weather and safety alerts regularly.".into(),
                "Avoid unnecessary travel during risky times.".into(),
                "Practice good health and hygiene.".into(),
                "Stay informed using trusted government sources.".into(),
            ],
        ),
    }
}
