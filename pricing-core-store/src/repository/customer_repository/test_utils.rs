use chrono::Utc;
use pricing_core_api::CustomerType;
use pricing_core_db::models::CustomerModel;
use uuid::Uuid;

pub fn create_test_customer(name: &str, customer_type: CustomerType) -> CustomerModel {
    CustomerModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: "Calle Mayor 1, Madrid".to_string(),
        place_id: None,
        directory_category: None,
        customer_type,
        registered_at: Utc::now(),
    }
}
