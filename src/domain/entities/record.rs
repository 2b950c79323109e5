/// Number of numbered storage locations every catalog record carries.
pub const LOCATION_COUNT: usize = 30;

/// One quantity cell as it arrived from the catalog file.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Quantity {
    Number(f64),
    #[default]
    Missing,
    NotNumeric(String),
}

impl Quantity {
    /// Value used by per-row totals: anything that is not a number counts as zero.
    pub fn or_zero(&self) -> f64 {
        match self {
            Quantity::Number(value) => *value,
            Quantity::Missing | Quantity::NotNumeric(_) => 0.0,
        }
    }

    /// Value used by column sums. Non-numbers poison the sum with NaN.
    pub fn raw(&self) -> f64 {
        match self {
            Quantity::Number(value) => *value,
            Quantity::Missing | Quantity::NotNumeric(_) => f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSlot {
    pub quantity: Quantity,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub code: Option<String>,
    pub description: Option<String>,
    pub barcode: String,
    pub salon_quantity: Quantity,
    pub salon_label: String,
    pub locations: [LocationSlot; LOCATION_COUNT],
    pub(crate) total_quantity: f64,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            code: None,
            description: None,
            barcode: String::new(),
            salon_quantity: Quantity::Missing,
            salon_label: String::new(),
            locations: std::array::from_fn(|_| LocationSlot::default()),
            total_quantity: 0.0,
        }
    }
}

impl Record {
    /// Slot for location `number` (1-based, as the catalog columns are numbered).
    pub fn location(&self, number: usize) -> Option<&LocationSlot> {
        number
            .checked_sub(1)
            .and_then(|idx| self.locations.get(idx))
    }

    /// Derived total attached when the catalog was loaded.
    pub fn total_quantity(&self) -> f64 {
        self.total_quantity
    }

    pub(crate) fn with_total(mut self, total: f64) -> Self {
        self.total_quantity = total;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_zero_policy_only_keeps_numbers() {
        assert_eq!(Quantity::Number(4.5).or_zero(), 4.5);
        assert_eq!(Quantity::Missing.or_zero(), 0.0);
        assert_eq!(Quantity::NotNumeric("n/a".to_string()).or_zero(), 0.0);
    }

    #[test]
    fn quantity_raw_value_is_nan_for_non_numbers() {
        assert_eq!(Quantity::Number(2.0).raw(), 2.0);
        assert!(Quantity::Missing.raw().is_nan());
        assert!(Quantity::NotNumeric("x".to_string()).raw().is_nan());
    }

    #[test]
    fn location_lookup_is_one_based() {
        let mut record = Record::default();
        record.locations[0].quantity = Quantity::Number(3.0);

        let first = record.location(1).expect("location 1 should exist");
        assert_eq!(first.quantity, Quantity::Number(3.0));
        assert!(record.location(0).is_none(), "location 0 does not exist");
        assert!(record.location(LOCATION_COUNT).is_some());
        assert!(record.location(LOCATION_COUNT + 1).is_none());
    }
}
