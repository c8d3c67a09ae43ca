use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{fuel::Fuels, merit::MeritOrder, plan::Plan},
    quantity::power::Megawatts,
};

/// Render the plan along with the merit order it was built from.
pub fn build_plan_table(merit_order: &MeritOrder<'_>, fuels: &Fuels, plan: &Plan) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Unit", "Type", "Merit", "Min", "Capacity", "Power"]);
    for (entry, dispatched) in merit_order.iter().zip_eq(plan.iter()) {
        let capacity = entry.unit.capacity(fuels).round_to_tenth();
        table.add_row(vec![
            Cell::new(&dispatched.name),
            Cell::new(entry.unit.kind).add_attribute(Attribute::Dim),
            Cell::new(format!("{:.2}", entry.merit.0.0)).set_alignment(CellAlignment::Right),
            Cell::new(entry.unit.min_power).set_alignment(CellAlignment::Right),
            Cell::new(capacity).set_alignment(CellAlignment::Right),
            Cell::new(dispatched.power).set_alignment(CellAlignment::Right).fg(
                if dispatched.power == Megawatts::ZERO {
                    Color::DarkGrey
                } else if dispatched.power >= capacity {
                    Color::Green
                } else {
                    Color::DarkYellow
                },
            ),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(plan.total().round_to_tenth())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}
