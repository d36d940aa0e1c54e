// src/ui/visual.rs
// Table, bar chart, and precaution checklist for a stored (category, zone)
// tag. Everything here is re-derived from the datasets on each render; the
// turn record carries no data of its own.

use polars::prelude::DataFrame;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{BarChart, Block, BorderType, Cell, Paragraph, Row, Table, Widget},
};

use crate::app::App;
use crate::chat::Category;
use crate::ui::style::{category_color, chart_title};
use crate::ui::tips;

pub fn render_visual(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(turn) = app.visual_turn() else {
        return;
    };
    let Some(category) = turn.category else {
        return;
    };
    let Some(zone) = turn.zone.as_deref() else {
        render_notice(area, buf, "❗ No zone was resolved for this reply.");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Zone rows
            Constraint::Percentage(40), // Bar chart
            Constraint::Min(8),         // Precautions
        ])
        .split(area);

    render_zone_table(app, category, zone, chunks[0], buf);
    match category {
        Category::Risk => render_risk_chart(app, zone, chunks[1], buf),
        _ => render_totals_chart(app, category, chunks[1], buf),
    }
    render_precautions(category, zone, chunks[2], buf);
}

fn render_zone_table(app: &App, category: Category, zone: &str, area: Rect, buf: &mut Buffer) {
    let df = match app.datasets.rows_for_zone(category, zone) {
        Ok(df) => df,
        Err(e) => {
            tracing::error!(category = category.label(), zone, error = %e, "zone filter failed");
            render_notice(area, buf, "⚠ Could not read this dataset.");
            return;
        }
    };

    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let widths: Vec<Constraint> = headers
        .iter()
        .map(|h| Constraint::Length(h.chars().count().clamp(6, 18) as u16 + 2))
        .collect();

    let header = Row::new(headers.iter().map(|h| Cell::from(h.as_str())))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = (0..df.height())
        .map(|i| Row::new(row_cells(&df, i)))
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::bordered()
            .title(format!("{} — {}", chart_title(category), zone))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(category_color(category))),
    );
    Widget::render(table, area, buf);
}

fn row_cells(df: &DataFrame, index: usize) -> Vec<Cell<'static>> {
    df.get_columns()
        .iter()
        .map(|column| {
            let text = column
                .as_materialized_series()
                .get(index)
                .map(|value| value.str_value().into_owned())
                .unwrap_or_default();
            Cell::from(text)
        })
        .collect()
}

fn render_totals_chart(app: &App, category: Category, area: Rect, buf: &mut Buffer) {
    let totals = match app.datasets.zone_totals(category) {
        Ok(Some(totals)) => totals,
        Ok(None) => return,
        Err(e) => {
            tracing::error!(category = category.label(), error = %e, "aggregation failed");
            render_notice(area, buf, "⚠ Could not aggregate this dataset.");
            return;
        }
    };
    render_bars(
        &totals,
        chart_title(category),
        category_color(category),
        None,
        area,
        buf,
    );
}

fn render_risk_chart(app: &App, zone: &str, area: Rect, buf: &mut Buffer) {
    match app.datasets.risk_profile(zone) {
        Ok(Some(levels)) => {
            render_bars(
                &levels,
                chart_title(Category::Risk),
                category_color(Category::Risk),
                Some(3),
                area,
                buf,
            );
        }
        Ok(None) => {
            render_notice(area, buf, "⚠ Risk data for this zone is incomplete or missing.");
        }
        Err(e) => {
            tracing::error!(zone, error = %e, "risk profile failed");
            render_notice(area, buf, "⚠ Could not read the risk dataset.");
        }
    }
}

fn render_bars(
    data: &[(String, u64)],
    title: &str,
    color: Color,
    max: Option<u64>,
    area: Rect,
    buf: &mut Buffer,
) {
    const BAR_WIDTH: u16 = 10;
    const BAR_GAP: u16 = 1;

    // Take the leading bars that fit; data arrives sorted descending.
    let inner_width = area.width.saturating_sub(2);
    let max_bars = (inner_width / (BAR_WIDTH + BAR_GAP)).max(1) as usize;
    let bar_data: Vec<(&str, u64)> = data
        .iter()
        .take(max_bars)
        .map(|(label, value)| (label.as_str(), *value))
        .collect();

    let ceiling = max
        .or_else(|| bar_data.iter().map(|(_, v)| *v).max())
        .unwrap_or(1)
        .max(1);

    let chart = BarChart::default()
        .block(
            Block::bordered()
                .title(format!(" {title} "))
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .data(&bar_data)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(ceiling)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color));
    Widget::render(chart, area, buf);
}

fn render_precautions(category: Category, zone: &str, area: Rect, buf: &mut Buffer) {
    let (title, checklist) = tips::precautions(category, zone);
    let mut lines = Vec::with_capacity(checklist.len());
    for tip in &checklist {
        lines.push(Line::from(format!("• {tip}")));
    }
    let tips_widget = Paragraph::new(lines).block(
        Block::bordered()
            .title(format!("⚠️ Precaution for {title}"))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(category_color(category))),
    );
    tips_widget.render(area, buf);
}

fn render_notice(area: Rect, buf: &mut Buffer, message: &str) {
    let notice = Paragraph::new(message.to_string())
        .block(Block::bordered().border_type(BorderType::Rounded))
        .style(Style::default().fg(Color::Yellow));
    notice.render(area, buf);
}
