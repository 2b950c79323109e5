use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::column_query::ColumnQuery;
use crate::domain::entities::filter::FilterMode;
use crate::domain::entities::record::Record;
use crate::domain::entities::summary::SummaryRow;
use crate::usecase::ports::grid::{GridSink, GridView};
use crate::usecase::services::column_query::apply_column_query;
use crate::usecase::services::query_service::QueryService;

/// Generation number handed to the next load.
pub fn next_generation(latest: u64) -> u64 {
    latest.wrapping_add(1)
}

/// A finished load may only be applied while no newer load has started.
pub fn load_is_current(latest: u64, generation: u64) -> bool {
    latest == generation
}

#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub query_service: Signal<Option<Arc<QueryService>>>,
    pub source_path: Signal<String>,
    /// Last search or show-all result, before column filter and sort.
    pub base_view: Signal<GridView>,
    pub column_query: Signal<ColumnQuery>,
    pub rows: Signal<Vec<Record>>,
    pub summary: Signal<SummaryRow>,
    pub grand_total: Signal<f64>,
    pub search_mode: Signal<String>,
    pub search_text: Signal<String>,
    pub load_generation: Signal<u64>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(source_path: String) -> Self {
        Self {
            query_service: use_signal(|| None::<Arc<QueryService>>),
            source_path: use_signal(move || source_path),
            base_view: use_signal(GridView::default),
            column_query: use_signal(ColumnQuery::default),
            rows: use_signal(Vec::<Record>::new),
            summary: use_signal(SummaryRow::default),
            grand_total: use_signal(|| 0.0_f64),
            search_mode: use_signal(|| FilterMode::default().as_str().to_string()),
            search_text: use_signal(String::new),
            load_generation: use_signal(|| 0_u64),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }

    /// Starts a new load and returns its generation number.
    pub fn begin_load(&mut self) -> u64 {
        let next = next_generation(*self.load_generation.peek());
        self.load_generation.set(next);
        self.busy.set(true);
        next
    }

    pub fn is_current_load(&self, generation: u64) -> bool {
        load_is_current(*self.load_generation.peek(), generation)
    }

    /// Swaps the column filter/sort and redraws the last result with it.
    pub fn set_column_query(&mut self, query: ColumnQuery) {
        let shown = apply_column_query(&self.base_view.peek(), &query);
        self.column_query.set(query);
        self.show(shown);
    }

    fn show(&mut self, view: GridView) {
        let GridView {
            rows,
            summary,
            grand_total,
        } = view;
        self.rows.set(rows);
        self.summary.set(summary);
        self.grand_total.set(grand_total);
    }
}

impl GridSink for AppState {
    fn refresh(&mut self, view: GridView) {
        let shown = apply_column_query(&view, &self.column_query.peek());
        self.base_view.set(view);
        self.show(shown);
    }
}
