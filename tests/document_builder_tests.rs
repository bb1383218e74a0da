//! Integration tests for document building and validation.

use mystore_api::document::{
    make, specs, Batch, Document, DocumentError, Field, FieldKind, Localized, NewCustomer,
    NewProduct, NewResource, NewTaxClass, ResourceBuilder, ResourceId,
};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_product_document_end_to_end() {
    let mut product = ResourceBuilder::new(&specs::PRODUCTS);
    product
        .set_attribute("name", json!({"no": "Test"}))
        .set_attribute("slug", json!({"no": "test"}))
        .set_relationship_from_list("categories", "categories", [10, 11]);

    let built = assert_ok!(product.build());
    let text = built.to_json_string();

    assert_eq!(
        text,
        r#"{"data":{"type":"products","attributes":{"name":{"no":"Test"},"slug":{"no":"test"}},"relationships":{"categories":{"data":[{"type":"categories","id":10},{"type":"categories","id":11}]}}}}"#
    );
    assert!(built.as_value()["data"].get("id").is_none());

    let typed = NewProduct::new(
        Localized::single("no", "Test"),
        Localized::single("no", "test"),
        [10, 11],
    );
    assert_eq!(assert_ok!(typed.build()).to_json_string(), text);
}

#[test]
fn test_mandatory_fields_checked_for_every_spec() {
    for &spec in specs::ALL {
        let empty = ResourceBuilder::new(spec);
        let required = spec.mandatory_attributes.len() + spec.mandatory_relationships.len();

        if required == 0 {
            assert_ok!(empty.build());
            continue;
        }

        let error = assert_err!(empty.build());
        let DocumentError::MissingMandatoryField { resource_type, .. } = error else {
            panic!("unexpected error for {}", spec.resource_type);
        };
        assert_eq!(resource_type, spec.resource_type);

        let mut full = ResourceBuilder::new(spec);
        for name in spec.mandatory_attributes {
            full.set_attribute(*name, "x");
        }
        for name in spec.mandatory_relationships {
            full.set_relationship(*name, "things", 1);
        }
        full.set_attribute("extra", 1).set_attribute("another", true);
        assert_ok!(full.build());
    }
}

#[test]
fn test_missing_relationship_reported_after_attributes() {
    let mut tag = ResourceBuilder::new(&specs::PRODUCT_TAGS);
    tag.set_attribute("key", "color");

    let error = assert_err!(tag.build());
    assert!(matches!(
        error,
        DocumentError::MissingMandatoryField { field: "value", kind: FieldKind::Attribute, .. }
    ));

    tag.set_attribute("value", "red");
    let error = assert_err!(tag.build());
    assert!(matches!(
        error,
        DocumentError::MissingMandatoryField { field: "product", kind: FieldKind::Relationship, .. }
    ));
    assert!(error.to_string().contains("relationship"));
}

#[test]
fn test_set_all_attributes_skips_names_and_unset() {
    let mut document = Document::new("products");
    let fields: Vec<(&str, Field)> = vec![
        ("name", Field::Value(json!("A"))),
        ("category_ids", Field::Value(json!([1, 2]))),
        ("description", Field::Unset),
        ("notes", Field::Null),
    ];
    document.set_all_attributes(fields, &["category_ids"]);

    let built = assert_ok!(document.build());
    assert_eq!(
        built.as_value()["data"]["attributes"],
        json!({"name": "A", "notes": null})
    );
}

#[test]
fn test_relationship_order_is_preserved() {
    let mut document = Document::new("product-variants");
    document.set_relationship_from_list("product-attributes", "product-attributes", [3, 1, 2, 1]);

    let built = assert_ok!(document.build());
    let ids: Vec<Value> = built.as_value()["data"]["relationships"]["product-attributes"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(3), json!(1), json!(2), json!(1)]);
}

#[test]
fn test_customer_backfill_respects_caller_values() {
    let mut customer = ResourceBuilder::new(&specs::CUSTOMERS);
    customer
        .set_attribute("name", "Ola")
        .set_attribute("lastname", "Nordmann")
        .set_attribute("email", "ola@example.no")
        .set_attribute("address_address", "X")
        .set_attribute("address_zipcode", 1234)
        .set_attribute("address_city", "Oslo")
        .set_attribute("address_country", "NO")
        .set_attribute("billing_address_city", "Bergen");

    let built = assert_ok!(customer.build());
    let attributes = &built.as_value()["data"]["attributes"];

    assert_eq!(attributes["billing_address_address"], "X");
    assert_eq!(attributes["billing_address_city"], "Bergen");
    assert_eq!(attributes["address_zipcode"], "1234");
    assert_eq!(attributes["billing_address_zipcode"], "1234");

    // Building leaves the caller's values untouched.
    assert_eq!(customer.attribute("address_zipcode"), Some(&json!(1234)));
}

#[test]
fn test_typed_customer_requires_nothing_more() {
    let customer = NewCustomer::new("Kari", "Hansen", "kari@example.no", "Vei 2", "5003", "Bergen", "NO");
    let built = assert_ok!(customer.build());
    assert_eq!(built.resource_type(), Some("customers"));
}

#[test]
fn test_tax_class_and_ids() {
    let tax = NewTaxClass {
        id: Some(ResourceId::from("25")),
        tax_rate: 25.0,
        title: "MVA".to_string(),
        description: "Merverdiavgift".to_string(),
        created_at: None,
        updated_at: None,
    };
    let built = assert_ok!(tax.build());
    assert_eq!(built.as_value()["data"]["id"], "25");
}

#[test]
fn test_batch_of_documents() {
    let mut batch = Batch::new();
    assert_eq!(batch.to_json_string(), "[]");

    batch
        .add(assert_ok!(make::product_tag("color", "red", 1, None)))
        .add(assert_ok!(make::property_option("Material", "no", None)));

    let value = batch.build();
    let types: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|document| document["data"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["product-tags", "product-property-options"]);
}
