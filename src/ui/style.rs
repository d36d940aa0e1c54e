use ratatui::style::Color;

use crate::chat::Category;

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Flood => Color::Blue,
        Category::Accident => Color::Red,
        Category::Crime => Color::Yellow,
        Category::Pollution => Color::Gray,
        Category::Heat => Color::Green,
        Category::Population => Color::Magenta,
        Category::Risk => Color::LightMagenta,
    }
}

pub fn chart_title(category: Category) -> &'static str {
    match category {
        Category::Flood => "Flood Impact",
        Category::Accident => "Accident Cases",
        Category::Crime => "Crime by Zone",
        Category::Pollution => "Air Pollution",
        Category::Heat => "Heatstroke Cases",
        Category::Population => "Population by Zone",
        Category::Risk => "Risk Level (1=Low, 2=Medium, 3=High)",
    }
}
