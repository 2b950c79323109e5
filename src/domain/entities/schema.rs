//! Column names used by catalog files and by the grid headers.

pub const CODE: &str = "SHIFRA";
pub const DESCRIPTION: &str = "OPIS";
pub const BARCODE: &str = "BARKOD";
pub const SALON_QUANTITY: &str = "KOLICINA_SALON";
pub const SALON_LABEL: &str = "SALON";
pub const TOTAL_QUANTITY: &str = "TOTAL_KOLICINA";

pub fn location_quantity(number: usize) -> String {
    format!("KOLICINA_L{number}")
}

pub fn location_label(number: usize) -> String {
    format!("LOKACIJA_{number}")
}

/// One grid column, addressed by what it shows rather than by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnField {
    Code,
    Description,
    Barcode,
    SalonQuantity,
    SalonLabel,
    LocationQuantity(usize),
    LocationLabel(usize),
    TotalQuantity,
}

impl ColumnField {
    pub fn is_quantity(self) -> bool {
        matches!(
            self,
            ColumnField::SalonQuantity
                | ColumnField::LocationQuantity(_)
                | ColumnField::TotalQuantity
        )
    }
}
