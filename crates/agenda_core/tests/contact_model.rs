use agenda_core::{Contact, ContactInput, ContactValidationError, ValidContact};

fn input(name: &str, age: &str, email: &str, phone: &str) -> ContactInput {
    ContactInput::new(name, age, email, phone)
}

#[test]
fn valid_input_normalizes_to_typed_fields() {
    let valid = input("Ana", "30", "a@x.com", "111").validate().unwrap();

    assert_eq!(
        valid,
        ValidContact {
            name: "Ana".to_string(),
            age: 30,
            email: "a@x.com".to_string(),
            phone: 111,
        }
    );
}

#[test]
fn age_bounds_are_inclusive() {
    assert!(input("Ana", "18", "a@x.com", "111").validate().is_ok());
    assert!(input("Ana", "100", "a@x.com", "111").validate().is_ok());

    let low = input("Ana", "17", "a@x.com", "111").validate().unwrap_err();
    assert!(matches!(low, ContactValidationError::AgeOutOfRange { .. }));

    let high = input("Ana", "101", "a@x.com", "111").validate().unwrap_err();
    assert!(matches!(high, ContactValidationError::AgeOutOfRange { .. }));
}

#[test]
fn non_numeric_age_is_out_of_range() {
    let err = input("Ana", "thirty", "a@x.com", "111")
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        ContactValidationError::AgeOutOfRange {
            value: "thirty".to_string()
        }
    );
}

#[test]
fn name_requires_two_characters() {
    let err = input("A", "30", "a@x.com", "111").validate().unwrap_err();
    assert_eq!(err, ContactValidationError::NameTooShort { length: 1 });

    assert!(input("Al", "30", "a@x.com", "111").validate().is_ok());
}

#[test]
fn email_must_have_local_and_domain_parts() {
    for bad in ["plainaddress", "@x.com", "a@", "a b@x.com"] {
        let err = input("Ana", "30", bad, "111").validate().unwrap_err();
        assert!(
            matches!(err, ContactValidationError::InvalidEmail { .. }),
            "`{bad}` should be rejected"
        );
    }

    assert!(input("Ana", "30", "a@x.com", "111").validate().is_ok());
}

#[test]
fn phone_must_be_a_digit_sequence() {
    for bad in ["", "12-34", "+34111", "phone"] {
        let err = input("Ana", "30", "a@x.com", bad).validate().unwrap_err();
        assert!(
            matches!(err, ContactValidationError::InvalidPhone { .. }),
            "`{bad}` should be rejected"
        );
    }

    let valid = input("Ana", "30", "a@x.com", "0611").validate().unwrap();
    // Leading zeros are not preserved; phone is a plain integer.
    assert_eq!(valid.phone, 611);
}

#[test]
fn first_failing_rule_wins() {
    // Age is checked before name, name before email, email before phone.
    let err = input("A", "5", "broken", "x").validate().unwrap_err();
    assert!(matches!(err, ContactValidationError::AgeOutOfRange { .. }));

    let err = input("A", "30", "broken", "x").validate().unwrap_err();
    assert!(matches!(err, ContactValidationError::NameTooShort { .. }));

    let err = input("Ana", "30", "broken", "x").validate().unwrap_err();
    assert!(matches!(err, ContactValidationError::InvalidEmail { .. }));
}

#[test]
fn validation_messages_name_the_field() {
    let age = input("Ana", "101", "a@x.com", "111")
        .validate()
        .unwrap_err();
    assert!(age.to_string().contains("age"));

    let name = input("A", "30", "a@x.com", "111").validate().unwrap_err();
    assert!(name.to_string().contains("name"));

    let email = input("Ana", "30", "broken", "111").validate().unwrap_err();
    assert!(email.to_string().contains("email"));

    let phone = input("Ana", "30", "a@x.com", "x").validate().unwrap_err();
    assert!(phone.to_string().contains("phone"));
}

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let contact = Contact {
        id: 7,
        name: "Ana".to_string(),
        age: 30,
        email: "a@x.com".to_string(),
        phone: 111,
    };

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["age"], 30);
    assert_eq!(json["email"], "a@x.com");
    assert_eq!(json["phone"], 111);

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}
