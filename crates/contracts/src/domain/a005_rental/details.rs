use std::fmt::Display;

use chrono::TimeZone;

use super::aggregate::Rental;
use crate::shared::date_format::format_display;

/// Read-only panel shown once a rental is picked in the return form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalDetails {
    pub item: String,
    pub size: String,
    pub qty_rent: String,
    pub qty_returned: String,
    pub qty_remaining: String,
    pub date_begin: String,
    pub date_end: String,
    pub status: String,
}

impl RentalDetails {
    pub fn from_rental<Tz>(rental: &Rental, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            item: format!("Subcategory ID: {}", rental.id_clothing_category_sub),
            size: format!("Size ID: {}", rental.id_clothing_size),
            qty_rent: rental.clothes_qty_rent.to_string(),
            qty_returned: rental.clothes_qty_return.to_string(),
            qty_remaining: rental.remaining().to_string(),
            date_begin: format_display(rental.clothes_rent_date_begin, tz),
            date_end: format_display(rental.clothes_rent_date_end, tz),
            status: rental.clothes_rent_status.display_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_rental::aggregate::fixtures::rental;
    use chrono::Utc;

    #[test]
    fn test_details() {
        let details = RentalDetails::from_rental(&rental(5, 7, 4, 1, 4), &Utc);
        assert_eq!(details.qty_remaining, "3");
        assert_eq!(details.status, "Not Returned");
        assert_eq!(details.date_end, "05-Jan-2024 00:00");
        assert_eq!(details.item, "Subcategory ID: 9");
    }
}
