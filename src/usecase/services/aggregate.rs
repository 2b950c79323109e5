use crate::domain::entities::record::Record;
use crate::domain::entities::summary::SummaryRow;

/// Sum of the derived totals of `records`.
pub fn compute_grand_total(records: &[Record]) -> f64 {
    records.iter().map(Record::total_quantity).sum()
}

/// Column sums for the pinned row. Quantity cells that are not numbers turn
/// their column sum into NaN rather than being skipped.
pub fn compute_summary_row(records: &[Record]) -> SummaryRow {
    let mut summary = SummaryRow::default();
    for record in records {
        summary.salon_quantity += record.salon_quantity.raw();
        for (sum, slot) in summary
            .location_quantities
            .iter_mut()
            .zip(record.locations.iter())
        {
            *sum += slot.quantity.raw();
        }
    }
    summary.total_quantity = compute_grand_total(records);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::{Quantity, LOCATION_COUNT};
    use crate::usecase::services::totals::compute_row_total;

    fn zeroed_record() -> Record {
        let mut record = Record::default();
        record.salon_quantity = Quantity::Number(0.0);
        for slot in record.locations.iter_mut() {
            slot.quantity = Quantity::Number(0.0);
        }
        record
    }

    fn with_total(record: Record) -> Record {
        let total = compute_row_total(&record);
        record.with_total(total)
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(compute_grand_total(&[]), 0.0);
        assert_eq!(compute_summary_row(&[]), SummaryRow::default());
    }

    #[test]
    fn single_record_summary_matches_its_columns() {
        let mut record = zeroed_record();
        record.salon_quantity = Quantity::Number(5.0);
        record.locations[0].quantity = Quantity::Number(3.0);
        let records = vec![with_total(record)];

        let summary = compute_summary_row(&records);

        assert_eq!(summary.salon_quantity, 5.0);
        assert_eq!(summary.location(1), Some(3.0));
        for number in 2..=LOCATION_COUNT {
            assert_eq!(summary.location(number), Some(0.0), "location {number}");
        }
        assert_eq!(summary.total_quantity, 8.0);
    }

    #[test]
    fn grand_total_ignores_order() {
        let mut a = zeroed_record();
        a.salon_quantity = Quantity::Number(2.0);
        let mut b = zeroed_record();
        b.locations[4].quantity = Quantity::Number(7.0);
        let mut c = zeroed_record();
        c.locations[29].quantity = Quantity::Number(1.0);

        let forward = vec![with_total(a.clone()), with_total(b.clone()), with_total(c.clone())];
        let backward = vec![with_total(c), with_total(b), with_total(a)];

        assert_eq!(compute_grand_total(&forward), 10.0);
        assert_eq!(compute_grand_total(&forward), compute_grand_total(&backward));
    }

    #[test]
    fn missing_cells_poison_only_their_column() {
        let mut record = zeroed_record();
        record.salon_quantity = Quantity::Number(1.0);
        record.locations[2].quantity = Quantity::Missing;
        let records = vec![with_total(record)];

        let summary = compute_summary_row(&records);

        assert!(summary.location(3).is_some_and(f64::is_nan));
        assert_eq!(summary.location(2), Some(0.0));
        assert_eq!(summary.salon_quantity, 1.0);
        assert_eq!(summary.total_quantity, 1.0, "row totals already zeroed the gap");
    }
}
