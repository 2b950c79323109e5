use std::cmp::Ordering;

use crate::domain::entities::cell::{record_cell, record_number};
use crate::domain::entities::column_query::{ColumnFilter, ColumnQuery, SortDirection, SortSpec};
use crate::domain::entities::record::Record;
use crate::domain::entities::schema::ColumnField;
use crate::usecase::ports::grid::GridView;
use crate::usecase::services::aggregate::compute_summary_row;

/// Header click cycle: unsorted, ascending, descending, unsorted.
pub fn next_sort(current: Option<SortSpec>, field: ColumnField) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Asc => Some(SortSpec {
                field,
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortSpec {
            field,
            direction: SortDirection::Asc,
        }),
    }
}

/// Case-insensitive substring match on the displayed cell text. A blank term
/// leaves the column unfiltered.
pub fn matches_column_filter(record: &Record, filter: &ColumnFilter) -> bool {
    if filter.term.is_empty() {
        return true;
    }
    record_cell(record, filter.field)
        .to_uppercase()
        .contains(&filter.term.to_uppercase())
}

fn compare_cells(a: &Record, b: &Record, field: ColumnField) -> Ordering {
    if field.is_quantity() {
        // Blank and text cells sort before numbers.
        match (record_number(a, field), record_number(b, field)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    } else {
        record_cell(a, field)
            .to_lowercase()
            .cmp(&record_cell(b, field).to_lowercase())
    }
}

/// Narrows and orders the rows of `view`. The pinned row is recomputed from
/// the rows that remain; the grand total stays that of the search result.
pub fn apply_column_query(view: &GridView, query: &ColumnQuery) -> GridView {
    let mut rows: Vec<Record> = view
        .rows
        .iter()
        .filter(|record| {
            query
                .filter
                .as_ref()
                .map_or(true, |filter| matches_column_filter(record, filter))
        })
        .cloned()
        .collect();

    if let Some(sort) = query.sort {
        // sort_by is stable, so equal cells keep catalog order in both directions.
        rows.sort_by(|a, b| {
            let ordering = compare_cells(a, b, sort.field);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    GridView {
        summary: compute_summary_row(&rows),
        rows,
        grand_total: view.grand_total,
    }
}
