use chrono::Utc;
use pricing_core_db::models::ProductModel;
use rust_decimal::Decimal;

/// Product with the given code and a list price of `list_price_cents / 100`.
pub fn create_test_product(code: &str, list_price_cents: i64) -> ProductModel {
    ProductModel::from_list_price(
        code,
        &format!("PRODUCTO {code}"),
        "PRUEBAS",
        Decimal::new(list_price_cents, 2),
        Utc::now(),
    )
    .unwrap()
}
