//! Validation gates of the rental and return forms.

use chrono::TimeZone;

use super::aggregate::Rental;
use super::request::{RentalRequest, ReturnRequest};
use crate::domain::common::parse_id;
use crate::shared::date_format::parse_local_input;
use crate::shared::validation::{ensure, positive_quantity, ValidationError};

/// Raw values of the create-rental form
#[derive(Debug, Clone, Default)]
pub struct RentalFormInput {
    pub customer: String,
    pub subcategory: String,
    pub size: String,
    pub quantity: String,
    pub begin: String,
    pub end: String,
}

impl RentalFormInput {
    pub fn validate<Tz: TimeZone>(&self, tz: &Tz) -> Result<RentalRequest, ValidationError> {
        let customer = parse_id(&self.customer)
            .ok_or_else(|| ValidationError::new("Please select a customer"))?;
        let subcategory = parse_id(&self.subcategory)
            .ok_or_else(|| ValidationError::new("Please select a subcategory"))?;
        let size =
            parse_id(&self.size).ok_or_else(|| ValidationError::new("Please select a size"))?;
        let quantity = positive_quantity(&self.quantity, "Please enter a valid quantity")?;

        let begin = parse_local_input(&self.begin, tz);
        let end = parse_local_input(&self.end, tz);
        let (Some(begin), Some(end)) = (begin, end) else {
            return Err(ValidationError::new("Please select rental dates"));
        };
        ensure(end > begin, "End date must be after start date")?;

        Ok(RentalRequest {
            id_clothing_category_sub: subcategory,
            id_clothing_size: size,
            id_clothing_customer: customer,
            clothes_qty_rent: quantity,
            rent_date_begin: begin,
            rent_date_end: end,
        })
    }
}

/// Raw values of the return form
#[derive(Debug, Clone, Default)]
pub struct ReturnFormInput {
    pub customer: String,
    pub rental: String,
    pub quantity: String,
    pub return_date: String,
}

impl ReturnFormInput {
    /// `rental` is the record currently selected in the rental selector
    pub fn validate<Tz: TimeZone>(
        &self,
        rental: Option<&Rental>,
        tz: &Tz,
    ) -> Result<ReturnRequest, ValidationError> {
        ensure(parse_id(&self.customer).is_some(), "Please select a customer")?;
        let rental = parse_id(&self.rental)
            .and(rental)
            .ok_or_else(|| ValidationError::new("Please select a rental"))?;
        let quantity = positive_quantity(&self.quantity, "Please enter a valid quantity")?;

        let remaining = rental.remaining();
        ensure(
            quantity <= remaining,
            format!("Cannot return more than {} item(s)", remaining),
        )?;

        let return_date = parse_local_input(&self.return_date, tz)
            .ok_or_else(|| ValidationError::new("Please select a return date"))?;
        ensure(
            return_date >= rental.clothes_rent_date_begin,
            "Return date cannot be before rental start date",
        )?;

        Ok(ReturnRequest {
            rental_id: rental.id,
            clothes_qty_return: quantity,
            actual_return_date: return_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_rental::aggregate::fixtures::rental;
    use crate::shared::date_format::fixtures::Eastern2024;
    use crate::shared::summary::duration_days;
    use chrono::Utc;

    fn rental_input() -> RentalFormInput {
        RentalFormInput {
            customer: "2".into(),
            subcategory: "9".into(),
            size: "21".into(),
            quantity: "1".into(),
            begin: "2024-01-01T00:00".into(),
            end: "2024-01-03T00:00".into(),
        }
    }

    fn rental_error(edit: impl FnOnce(&mut RentalFormInput)) -> String {
        let mut input = rental_input();
        edit(&mut input);
        input.validate(&Utc).unwrap_err().message().to_string()
    }

    #[test]
    fn test_valid_rental_request() {
        let request = rental_input().validate(&Utc).unwrap();
        assert_eq!(request.id_clothing_customer, 2);
        assert_eq!(request.clothes_qty_rent, 1);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["rent_date_begin"], "2024-01-01T00:00:00Z");
        assert_eq!(json["id_clothing_size"], 21);
    }

    #[test]
    fn test_rental_rules_in_order() {
        assert_eq!(
            rental_error(|i| {
                i.customer.clear();
                i.size.clear();
            }),
            "Please select a customer"
        );
        assert_eq!(rental_error(|i| i.subcategory.clear()), "Please select a subcategory");
        assert_eq!(rental_error(|i| i.size.clear()), "Please select a size");
        assert_eq!(rental_error(|i| i.quantity = "0".into()), "Please enter a valid quantity");
        assert_eq!(rental_error(|i| i.end.clear()), "Please select rental dates");
    }

    #[test]
    fn test_end_must_follow_begin() {
        assert_eq!(
            rental_error(|i| i.end = i.begin.clone()),
            "End date must be after start date"
        );
        assert_eq!(
            rental_error(|i| i.end = "2023-12-31T23:00".into()),
            "End date must be after start date"
        );
    }

    #[test]
    fn test_rental_dates_across_clock_change() {
        let mut input = rental_input();
        input.begin = "2024-11-02T10:00".into();
        input.end = "2024-11-03T10:00".into();
        let request = input.validate(&Eastern2024).unwrap();
        assert_eq!(request.rent_date_end.to_rfc3339(), "2024-11-03T15:00:00+00:00");
        assert_eq!(duration_days(request.rent_date_begin, request.rent_date_end), 2);
    }

    fn return_input() -> ReturnFormInput {
        ReturnFormInput {
            customer: "7".into(),
            rental: "5".into(),
            quantity: "2".into(),
            return_date: "2024-01-04T10:00".into(),
        }
    }

    #[test]
    fn test_valid_return_request() {
        let r = rental(5, 7, 4, 1, 1);
        let request = return_input().validate(Some(&r), &Utc).unwrap();
        assert_eq!(request.rental_id, 5);
        assert_eq!(request.clothes_qty_return, 2);
    }

    #[test]
    fn test_return_rules() {
        let r = rental(5, 7, 4, 1, 1);
        let err = |edit: fn(&mut ReturnFormInput), rental: Option<&Rental>| {
            let mut input = return_input();
            edit(&mut input);
            input.validate(rental, &Utc).unwrap_err().message().to_string()
        };

        assert_eq!(err(|i| i.customer.clear(), Some(&r)), "Please select a customer");
        assert_eq!(err(|i| i.rental.clear(), Some(&r)), "Please select a rental");
        assert_eq!(err(|_| {}, None), "Please select a rental");
        assert_eq!(err(|i| i.quantity.clear(), Some(&r)), "Please enter a valid quantity");
        assert_eq!(
            err(|i| i.quantity = "4".into(), Some(&r)),
            "Cannot return more than 3 item(s)"
        );
        assert_eq!(err(|i| i.return_date.clear(), Some(&r)), "Please select a return date");
        assert_eq!(
            err(|i| i.return_date = "2023-12-31T10:00".into(), Some(&r)),
            "Return date cannot be before rental start date"
        );
    }
}
