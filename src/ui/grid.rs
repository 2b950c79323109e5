use crate::domain::entities::cell::format_f64;
use crate::domain::entities::column_query::{SortDirection, SortSpec};
use crate::domain::entities::record::LOCATION_COUNT;
use crate::domain::entities::schema::{self, ColumnField};
use crate::domain::entities::summary::SummaryRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub field: ColumnField,
    pub header: String,
    pub align: Align,
    pub pinned_right: bool,
    pub width: Option<u32>,
}

impl ColumnDef {
    fn text(field: ColumnField, header: impl Into<String>) -> Self {
        Self {
            field,
            header: header.into(),
            align: Align::Left,
            pinned_right: false,
            width: None,
        }
    }

    fn quantity(field: ColumnField, header: impl Into<String>) -> Self {
        Self {
            align: Align::Right,
            ..Self::text(field, header)
        }
    }
}

/// Fixed grid schema: identity columns, salon, 30 location pairs, then the
/// total pinned to the right edge.
pub fn column_definitions() -> Vec<ColumnDef> {
    let mut columns = vec![
        ColumnDef::text(ColumnField::Code, schema::CODE),
        ColumnDef::text(ColumnField::Description, schema::DESCRIPTION),
        ColumnDef::text(ColumnField::Barcode, schema::BARCODE),
        ColumnDef::quantity(ColumnField::SalonQuantity, schema::SALON_QUANTITY),
        ColumnDef::text(ColumnField::SalonLabel, schema::SALON_LABEL),
    ];
    for number in 1..=LOCATION_COUNT {
        columns.push(ColumnDef::quantity(
            ColumnField::LocationQuantity(number),
            schema::location_quantity(number),
        ));
        columns.push(ColumnDef::text(
            ColumnField::LocationLabel(number),
            schema::location_label(number),
        ));
    }
    columns.push(ColumnDef {
        pinned_right: true,
        width: Some(80),
        ..ColumnDef::quantity(ColumnField::TotalQuantity, schema::TOTAL_QUANTITY)
    });
    columns
}

/// Pinned row cell; text columns are always blank.
pub fn summary_cell(summary: &SummaryRow, field: ColumnField) -> String {
    match field {
        ColumnField::SalonQuantity => format_f64(summary.salon_quantity),
        ColumnField::LocationQuantity(number) => {
            summary.location(number).map(format_f64).unwrap_or_default()
        }
        ColumnField::TotalQuantity => format_f64(summary.total_quantity),
        ColumnField::Code
        | ColumnField::Description
        | ColumnField::Barcode
        | ColumnField::SalonLabel
        | ColumnField::LocationLabel(_) => String::new(),
    }
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; font-family: sans-serif; font-size: 13px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #bbb;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; background: #f0f0f0; border: 1px solid #bbb; padding: 4px; white-space: nowrap;"
}

pub fn header_cell_style(column: &ColumnDef) -> String {
    let mut style = format!(
        "{} cursor: pointer; user-select: none; text-align: {};",
        table_header_cell_style(),
        column.align.css()
    );
    if let Some(width) = column.width {
        style.push_str(&format!(" width: {width}px; min-width: {width}px;"));
    }
    if column.pinned_right {
        style.push_str(" right: 0; z-index: 3;");
    }
    style
}

/// Header text with an arrow when the grid is sorted by this column.
pub fn header_label(column: &ColumnDef, sort: Option<&SortSpec>) -> String {
    match sort {
        Some(spec) if spec.field == column.field => match spec.direction {
            SortDirection::Asc => format!("{} \u{25b2}", column.header),
            SortDirection::Desc => format!("{} \u{25bc}", column.header),
        },
        _ => column.header.clone(),
    }
}

/// Style for one body or pinned cell of `column`.
pub fn cell_style(column: &ColumnDef, pinned_row: bool) -> String {
    let mut style = format!(
        "border: 1px solid #ddd; padding: 4px; white-space: nowrap; min-width: 100px; text-align: {};",
        column.align.css()
    );
    if let Some(width) = column.width {
        style.push_str(&format!(" width: {width}px; min-width: {width}px;"));
    }
    if column.pinned_right {
        style.push_str(" position: sticky; right: 0; z-index: 1; background: #fafafa;");
    }
    if pinned_row {
        style.push_str(" position: sticky; bottom: 0; font-weight: bold; background: #eef4ff;");
        if column.pinned_right {
            style.push_str(" z-index: 3;");
        }
    }
    style
}
