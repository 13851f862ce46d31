use super::aggregate::{Customer, CustomerDto};
use crate::domain::common::{EntityId, EntityMetadata};
use crate::shared::entity_form::{field, EntityForm, FieldValues};
use crate::shared::form_settings::{FieldSpec, FormConfig, DEFAULT_WARNING_RATIO};
use crate::shared::validation::{
    ensure, is_valid_email, is_valid_phone, required_text, ValidationError,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("cust_name", "Customer Name", 64),
    FieldSpec::text("cust_phone", "Phone", 16).with_placeholder("e.g. +62 812 3456 7890"),
    FieldSpec::text("cust_email", "Email", 128).with_placeholder("name@example.com"),
    FieldSpec::notes("cust_address", "Address", 256).mandatory(),
    FieldSpec::text("cust_city", "City", 64),
    FieldSpec::notes("cust_notes", "Notes", 256),
];

pub struct CustomerForm;

impl EntityForm for CustomerForm {
    type Record = Customer;
    type Payload = CustomerDto;

    const CONFIG: FormConfig = FormConfig {
        entity: "customer",
        title: "Customer",
        collection: "/api/customers",
        fields: FIELDS,
        warning_ratio: DEFAULT_WARNING_RATIO,
    };

    fn record_id(record: &Customer) -> EntityId {
        record.id
    }

    fn metadata(record: &Customer) -> &EntityMetadata {
        &record.metadata
    }

    fn field_values(record: &Customer) -> FieldValues {
        FieldValues::from([
            ("cust_name", record.cust_name.clone()),
            ("cust_phone", record.cust_phone.clone()),
            ("cust_email", record.cust_email.clone()),
            ("cust_address", record.cust_address.clone()),
            ("cust_city", record.cust_city.clone()),
            ("cust_notes", record.cust_notes.clone()),
        ])
    }

    fn build_payload(values: &FieldValues) -> Result<CustomerDto, ValidationError> {
        let name = required_text(field(values, "cust_name"), "Customer name is required")?;
        let phone = required_text(field(values, "cust_phone"), "Phone number is required")?;
        ensure(is_valid_phone(&phone), "Please enter a valid phone number")?;
        let email = required_text(field(values, "cust_email"), "Email address is required")?;
        ensure(is_valid_email(&email), "Please enter a valid email address")?;
        let address = required_text(field(values, "cust_address"), "Address is required")?;
        let city = required_text(field(values, "cust_city"), "City is required")?;

        Ok(CustomerDto {
            cust_name: name,
            cust_phone: phone,
            cust_email: email,
            cust_address: address,
            cust_city: city,
            cust_notes: field(values, "cust_notes").trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FieldValues {
        FieldValues::from([
            ("cust_name", "Sari Dewi".to_string()),
            ("cust_phone", "+62 812-3456-7890".to_string()),
            ("cust_email", "sari@example.com".to_string()),
            ("cust_address", "Jl. Merdeka 1".to_string()),
            ("cust_city", "Denpasar".to_string()),
            ("cust_notes", String::new()),
        ])
    }

    fn message_with(key: &'static str, value: &str) -> String {
        let mut values = filled();
        values.insert(key, value.to_string());
        CustomerForm::build_payload(&values)
            .unwrap_err()
            .message()
            .to_string()
    }

    #[test]
    fn test_valid_customer() {
        let dto = CustomerForm::build_payload(&filled()).unwrap();
        assert_eq!(dto.cust_city, "Denpasar");
        assert_eq!(dto.cust_notes, "");
    }

    #[test]
    fn test_each_rule_message() {
        assert_eq!(message_with("cust_name", " "), "Customer name is required");
        assert_eq!(message_with("cust_phone", ""), "Phone number is required");
        assert_eq!(message_with("cust_phone", "12-34"), "Please enter a valid phone number");
        assert_eq!(message_with("cust_email", ""), "Email address is required");
        assert_eq!(message_with("cust_email", "sari@"), "Please enter a valid email address");
        assert_eq!(
            message_with("cust_email", "sari@localhost"),
            "Please enter a valid email address"
        );
        assert_eq!(message_with("cust_address", ""), "Address is required");
        assert_eq!(message_with("cust_city", ""), "City is required");
    }

    #[test]
    fn test_first_failure_wins() {
        let mut values = filled();
        values.insert("cust_phone", "bad".into());
        values.insert("cust_city", String::new());
        assert_eq!(
            CustomerForm::build_payload(&values).unwrap_err().message(),
            "Please enter a valid phone number"
        );
    }
}
