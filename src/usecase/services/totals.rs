use crate::domain::entities::record::Record;

/// Salon quantity plus every numbered location quantity. Cells that are not
/// numbers count as zero, so this never fails on partially filled records.
pub fn compute_row_total(record: &Record) -> f64 {
    let mut total = record.salon_quantity.or_zero();
    for slot in &record.locations {
        total += slot.quantity.or_zero();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::Quantity;

    #[test]
    fn empty_record_totals_zero() {
        assert_eq!(compute_row_total(&Record::default()), 0.0);
    }

    #[test]
    fn sums_salon_and_all_locations() {
        let mut record = Record::default();
        record.salon_quantity = Quantity::Number(2.0);
        for (idx, slot) in record.locations.iter_mut().enumerate() {
            slot.quantity = Quantity::Number((idx + 1) as f64);
        }

        // 2 + (1 + 2 + ... + 30)
        assert_eq!(compute_row_total(&record), 2.0 + 465.0);
    }

    #[test]
    fn non_numeric_cells_count_as_zero() {
        let mut record = Record::default();
        record.salon_quantity = Quantity::NotNumeric("5".to_string());
        record.locations[0].quantity = Quantity::Number(1.5);
        record.locations[1].quantity = Quantity::Missing;
        record.locations[2].quantity = Quantity::NotNumeric("many".to_string());
        record.locations[29].quantity = Quantity::Number(-0.5);

        assert_eq!(compute_row_total(&record), 1.0);
    }
}
