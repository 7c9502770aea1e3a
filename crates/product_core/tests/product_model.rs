use chrono::{TimeZone, Utc};
use product_core::model::product::UNSAVED_PRODUCT_ID;
use product_core::Product;

#[test]
fn new_product_is_unsaved_and_unpublished() {
    let expiration = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
    let product = Product::new("milk", "code 7", 3, 1.5, expiration);

    assert_eq!(product.id, UNSAVED_PRODUCT_ID);
    assert!(!product.is_saved());
    assert!(!product.is_published);
    assert_eq!(product.warehouse_id, None);
    assert_eq!(product.expiration, expiration);
}

#[test]
fn product_serialization_uses_expected_wire_fields() {
    let expiration = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let mut product = Product::new("product 01", "code 01", 10, 10.0, expiration);
    product.id = 1;
    product.is_published = true;
    product.warehouse_id = Some(4);

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["code_value"], "code 01");
    assert_eq!(json["is_published"], true);
    assert_eq!(json["expiration"], "2021-01-01T00:00:00Z");
    assert_eq!(json["price"], 10.0);
    assert_eq!(json["warehouse_id"], 4);

    let decoded: Product = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, product);
}
