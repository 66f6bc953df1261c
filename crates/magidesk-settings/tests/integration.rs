//! Public-API behaviour: category routing, document codecs, validation.

use serde_json::json;

use magidesk_settings::{
    SettingsCategory, SettingsError, SettingsPayload, TaxRate, describe, split_sub_key,
    validate_payload,
};

#[test]
fn every_category_routes_to_a_default_document_and_back() {
    for category in SettingsCategory::ALL {
        let payload = SettingsPayload::default_for(category.as_key());
        assert_eq!(payload.category_key(), category.as_key());

        let document = payload.to_document().expect("defaults serialise");
        let decoded = SettingsPayload::from_document(category.as_key(), document)
            .expect("defaults parse back");
        assert_eq!(decoded, payload);
    }
}

#[test]
fn every_default_document_passes_validation() {
    for category in SettingsCategory::ALL {
        let payload = SettingsPayload::default_for(category.as_key());
        validate_payload(&payload).expect("default documents are valid");
    }
}

#[test]
fn partial_documents_fill_in_missing_fields() {
    let payload = SettingsPayload::from_document("general", json!({"business_name": "La Magia"}))
        .expect("partial document parses");
    let SettingsPayload::General(settings) = payload else {
        panic!("general key must produce a general payload");
    };
    assert_eq!(settings.business_name, "La Magia");
    assert_eq!(settings.receipt_copies, 1);
}

#[test]
fn unknown_categories_travel_as_opaque_documents() {
    let document = json!({"receipt_printer": "EPSON-TM20"});
    let payload = SettingsPayload::from_document("Printers", document.clone())
        .expect("opaque documents always parse");
    assert_eq!(
        payload,
        SettingsPayload::Opaque {
            category_key: "printers".to_string(),
            document,
        }
    );
}

#[test]
fn dotted_keys_split_and_describe_by_their_first_segment() {
    assert_eq!(split_sub_key("pos.tax"), ("pos", Some("tax")));
    assert_eq!(split_sub_key("pos"), ("pos", None));
    let (category, _) = split_sub_key("pos.tax");
    assert_eq!(describe(category).title, "Point of Sale");
}

#[test]
fn validation_names_the_offending_field() {
    let mut payload = SettingsPayload::default_for("pos");
    let SettingsPayload::Pos(ref mut settings) = payload else {
        panic!("pos key must produce a POS payload");
    };
    settings.tax.rates = vec![
        TaxRate {
            name: "GST".to_string(),
            rate: 5.0,
            is_default: true,
        },
        TaxRate {
            name: "PST".to_string(),
            rate: 7.0,
            is_default: true,
        },
    ];

    let err = validate_payload(&payload).expect_err("two defaults must fail");
    let SettingsError::InvalidField { field, .. } = err else {
        panic!("validation failures must name the field");
    };
    assert_eq!(field, "tax.rates");
}
