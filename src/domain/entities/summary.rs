use crate::domain::entities::record::LOCATION_COUNT;

/// Column sums shown in the grid's pinned bottom row. Label columns are blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub salon_quantity: f64,
    pub location_quantities: [f64; LOCATION_COUNT],
    pub total_quantity: f64,
}

impl Default for SummaryRow {
    fn default() -> Self {
        Self {
            salon_quantity: 0.0,
            location_quantities: [0.0; LOCATION_COUNT],
            total_quantity: 0.0,
        }
    }
}

impl SummaryRow {
    pub fn location(&self, number: usize) -> Option<f64> {
        number
            .checked_sub(1)
            .and_then(|idx| self.location_quantities.get(idx))
            .copied()
    }
}
