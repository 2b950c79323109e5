use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::config::Config;
use crate::domain::entities::cell::{format_f64, record_cell};
use crate::domain::entities::column_query::{ColumnFilter, ColumnQuery};
use crate::domain::entities::filter::FilterMode;
use crate::domain::entities::schema::ColumnField;
use crate::domain::error::CatalogError;
use crate::infra::import::file_source::{CatalogFormat, FileCatalogSource};
use crate::ui::grid::{
    cell_style, column_definitions, header_cell_style, header_label, root_container_style,
    summary_cell, table_container_style,
};
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::grid::GridSink;
use crate::usecase::services::column_query::next_sort;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::query_service::QueryService;

fn notify_error(title: &str, err: &CatalogError) {
    tracing::warn!(error = %err, "{title}");
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Loads `path` in the background. Only the most recently started load may
/// replace the catalog; a failed load keeps whatever is already shown.
fn start_load(mut state: AppState, path: PathBuf) {
    let generation = state.begin_load();
    state.status.set(format!("Loading {}...", path.display()));

    spawn(async move {
        let import_service = ImportService::new(FileCatalogSource::new(path));
        let result = import_service.load_catalog();

        if !state.is_current_load(generation) {
            tracing::debug!(generation, "discarding superseded catalog load");
            return;
        }

        match result {
            Ok(catalog) => {
                let status = format!(
                    "Loaded {} records from {} at {}",
                    catalog.len(),
                    catalog.source(),
                    Local::now().format("%H:%M:%S")
                );
                let query_service = Arc::new(QueryService::new(catalog));
                state.refresh(query_service.show_all());
                state.query_service.set(Some(query_service));
                state.status.set(status);
            }
            Err(err) => {
                state.status.set(err.to_string());
                notify_error("Failed to load popis!", &err);
            }
        }
        state.busy.set(false);
    });
}

fn run_search(mut state: AppState) {
    let Some(query_service) = state.query_service.cloned() else {
        state.status.set("No catalog loaded".to_string());
        return;
    };
    let mode = state.search_mode.cloned();
    let search_text = state.search_text.cloned();

    match query_service.search_raw(&mode, &search_text) {
        Ok(view) => {
            let status = format!(
                "{} of {} records match",
                view.rows.len(),
                query_service.catalog().len()
            );
            state.refresh(view);
            state.status.set(status);
        }
        Err(err) => {
            state.status.set(err.to_string());
            notify_error("Search failed", &err);
        }
    }
}

fn show_all(mut state: AppState) {
    let Some(query_service) = state.query_service.cloned() else {
        state.status.set("No catalog loaded".to_string());
        return;
    };
    let view = query_service.show_all();
    let status = format!("Showing all {} records", view.rows.len());
    state.refresh(view);
    state.status.set(status);
}

/// Changes the column or the term of the grid's column filter, keeping the other.
fn update_column_filter(mut state: AppState, field: Option<ColumnField>, term: Option<String>) {
    let mut query = state.column_query.cloned();
    let current = query.filter.take().unwrap_or(ColumnFilter {
        field: ColumnField::Code,
        term: String::new(),
    });
    query.filter = Some(ColumnFilter {
        field: field.unwrap_or(current.field),
        term: term.unwrap_or(current.term),
    });
    state.set_column_query(query);
}

fn toggle_sort(mut state: AppState, field: ColumnField) {
    let mut query = state.column_query.cloned();
    query.sort = next_sort(query.sort, field);
    state.set_column_query(query);
}

#[component]
fn OpenCatalogButton(state: AppState, disabled: bool) -> Element {
    rsx! {
        button {
            disabled: disabled,
            onclick: move |_| {
                let mut state = state;
                let Some(path) = FileDialog::new()
                    .add_filter("Catalog", &CatalogFormat::EXTENSIONS)
                    .pick_file()
                else {
                    return;
                };
                state.source_path.set(path.display().to_string());
                start_load(state, path);
            },
            "Open catalog..."
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();
    let mut state = AppState::new(config.dataset.path.display().to_string());

    use_effect(move || {
        let path = PathBuf::from(&*state.source_path.peek());
        start_load(state, path);
    });

    let columns = use_hook(|| Arc::new(column_definitions()));
    let current_rows = state.rows.cloned();
    let summary = state.summary.cloned();
    let grand_total = format_f64(*state.grand_total.read());
    let search_mode = state.search_mode.cloned();
    let search_text = state.search_text.cloned();
    let status = state.status.cloned();
    let busy = *state.busy.read();

    let column_query = state.column_query.cloned();
    let filter_field = column_query
        .filter
        .as_ref()
        .map_or(ColumnField::Code, |filter| filter.field);
    let filter_term = column_query
        .filter
        .as_ref()
        .map(|filter| filter.term.clone())
        .unwrap_or_default();
    let headers: Vec<(ColumnField, String, String)> = columns
        .iter()
        .map(|column| {
            (
                column.field,
                header_cell_style(column),
                header_label(column, column_query.sort.as_ref()),
            )
        })
        .collect();
    let filter_columns = columns.clone();

    rsx! {
        div { style: "{root_container_style()}",
            div { style: "display: flex; gap: 8px; align-items: center; padding: 8px;",
                label { "Search by" }
                select {
                    onchange: move |evt| state.search_mode.set(evt.value()),
                    for mode in FilterMode::ALL {
                        option {
                            value: mode.as_str(),
                            selected: search_mode == mode.as_str(),
                            "{mode.label()}"
                        }
                    }
                }
                input {
                    r#type: "text",
                    value: "{search_text}",
                    placeholder: "Search text",
                    oninput: move |evt| state.search_text.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            run_search(state);
                        }
                    },
                }
                button { disabled: busy, onclick: move |_| run_search(state), "Search" }
                button { disabled: busy, onclick: move |_| show_all(state), "Show all" }
                OpenCatalogButton { state, disabled: busy }
                label { "Column" }
                select {
                    onchange: move |evt| {
                        let field = evt
                            .value()
                            .parse::<usize>()
                            .ok()
                            .and_then(|idx| filter_columns.get(idx))
                            .map(|column| column.field);
                        update_column_filter(state, field, None);
                    },
                    for (idx, column) in columns.iter().enumerate() {
                        option {
                            value: "{idx}",
                            selected: column.field == filter_field,
                            "{column.header}"
                        }
                    }
                }
                input {
                    r#type: "text",
                    value: "{filter_term}",
                    placeholder: "Filter column",
                    oninput: move |evt| update_column_filter(state, None, Some(evt.value())),
                }
                button {
                    onclick: move |_| {
                        let mut state = state;
                        state.set_column_query(ColumnQuery::default());
                    },
                    "Clear filter"
                }
                span { style: "margin-left: auto;",
                    "Grand total: "
                    strong { "{grand_total}" }
                }
            }
            div { style: "{table_container_style()}",
                table { style: "border-collapse: separate; border-spacing: 0; width: max-content; background: #fff;",
                    thead {
                        tr {
                            for (field, style, label) in headers {
                                th {
                                    style: "{style}",
                                    onclick: move |_| toggle_sort(state, field),
                                    "{label}"
                                }
                            }
                        }
                    }
                    tbody {
                        for (row_idx, row) in current_rows.iter().enumerate() {
                            tr { key: "{row_idx}",
                                for column in columns.iter() {
                                    td { style: cell_style(column, false), {record_cell(row, column.field)} }
                                }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            for column in columns.iter() {
                                td { style: cell_style(column, true), {summary_cell(&summary, column.field)} }
                            }
                        }
                    }
                }
            }
            div { style: "padding: 4px 8px; color: #555;", "{status}" }
        }
    }
}
