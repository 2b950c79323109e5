use crate::domain::entities::record::Record;
use crate::domain::entities::summary::SummaryRow;

/// Everything the grid shows for one refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridView {
    pub rows: Vec<Record>,
    pub summary: SummaryRow,
    pub grand_total: f64,
}

/// Display surface fed by the query service. A refresh replaces whatever was
/// shown before; applying the same view twice leaves the same state.
pub trait GridSink {
    fn refresh(&mut self, view: GridView);
}
