//! Segment pricing over the catalog.
//!
//! A display price is `base_cost * (1 + margin)` rounded to two decimals. The
//! rounding only affects what is shown; stored costs keep full precision.

use pricing_core_api::CustomerType;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::product::ProductModel;

/// Display price of `product` for a customer of `customer_type`.
pub fn price_for(product: &ProductModel, customer_type: CustomerType) -> Decimal {
    display_price(product.base_cost, customer_type)
}

/// Display price for a bare base cost.
pub fn display_price(base_cost: Decimal, customer_type: CustomerType) -> Decimal {
    (base_cost * customer_type.markup_factor())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A catalog product with the price a given customer sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedProduct {
    pub product: ProductModel,
    pub display_price: Decimal,
}

/// Narrowing applied when building a price list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceListFilter {
    /// Case-insensitive match on the name, or plain match on the code
    pub search: Option<String>,
    /// Exact category label
    pub category: Option<String>,
}

impl PriceListFilter {
    pub fn search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            category: None,
        }
    }

    pub fn category(category: &str) -> Self {
        Self {
            search: None,
            category: Some(category.to_string()),
        }
    }

    pub fn matches(&self, product: &ProductModel) -> bool {
        let search_ok = match self.search.as_deref().filter(|s| !s.is_empty()) {
            None => true,
            Some(term) => {
                product.name.to_lowercase().contains(&term.to_lowercase())
                    || product.code.contains(term)
            }
        };
        let category_ok = match self.category.as_deref() {
            None => true,
            Some(category) => product.category.as_str() == category,
        };
        search_ok && category_ok
    }
}

/// Price every matching product for `customer_type`, keeping catalog order.
pub fn price_list(
    products: &[ProductModel],
    customer_type: CustomerType,
    filter: &PriceListFilter,
) -> Vec<PricedProduct> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .map(|p| PricedProduct {
            product: p.clone(),
            display_price: price_for(p, customer_type),
        })
        .collect()
}

/// Distinct category labels in the order they first appear in the catalog.
pub fn categories(products: &[ProductModel]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == product.category.as_str()) {
            seen.push(product.category.to_string());
        }
    }
    seen
}

/// Products whose name or code contains `term`, ignoring case.
pub fn search_products<'a>(products: &'a [ProductModel], term: &str) -> Vec<&'a ProductModel> {
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term) || p.code.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;
    use chrono::Utc;

    fn product_with_cost(base_cost: Decimal) -> ProductModel {
        let mut product = ProductModel::from_list_price(
            "99999",
            "PRODUCTO PRUEBA",
            "PRUEBAS",
            Decimal::from(1),
            Utc::now(),
        )
        .unwrap();
        product.base_cost = base_cost;
        product
    }

    #[test]
    fn test_price_for_segments() {
        let product = product_with_cost(Decimal::new(1000, 2));
        assert_eq!(price_for(&product, CustomerType::Base), Decimal::new(1300, 2));
        assert_eq!(price_for(&product, CustomerType::HotelCateringVolumen), Decimal::new(1400, 2));
        assert_eq!(price_for(&product, CustomerType::Chino), Decimal::new(1170, 2));
        assert_eq!(price_for(&product, CustomerType::Hindu), Decimal::new(1170, 2));
        assert_eq!(price_for(&product, CustomerType::Hosteleria), Decimal::new(1350, 2));
    }

    #[test]
    fn test_display_rounding_leaves_cost_untouched() {
        let product = product_with_cost(Decimal::new(3333, 3));
        // 3.333 * 1.17 = 3.89961
        assert_eq!(price_for(&product, CustomerType::Chino), Decimal::new(390, 2));
        assert_eq!(product.base_cost, Decimal::new(3333, 3));
        // 0.125 * 1.40 = 0.175 -> midpoint rounds away from zero
        assert_eq!(display_price(Decimal::new(125, 3), CustomerType::HotelCateringVolumen), Decimal::new(18, 2));
    }

    #[test]
    fn test_base_price_reproduces_list_price() {
        for product in seed_products(Utc::now()).unwrap() {
            assert_eq!(
                price_for(&product, CustomerType::Base),
                product.list_price,
                "product {}",
                product.code
            );
        }
    }

    #[test]
    fn test_price_list_filters() {
        let products = seed_products(Utc::now()).unwrap();

        let all = price_list(&products, CustomerType::Base, &PriceListFilter::default());
        assert_eq!(all.len(), products.len());
        assert_eq!(all[0].product.code.as_str(), "68008");

        let hamburgers = price_list(&products, CustomerType::Hosteleria, &PriceListFilter::category("HAMBURGUESAS"));
        assert_eq!(hamburgers.len(), 4);

        let by_name = price_list(&products, CustomerType::Chino, &PriceListFilter::search("solomillo"));
        assert_eq!(by_name.len(), 5);

        let by_code = price_list(&products, CustomerType::Chino, &PriceListFilter::search("6800"));
        assert_eq!(by_code.len(), 3);

        let both = PriceListFilter {
            search: Some("solomillo".to_string()),
            category: Some("ANGUS".to_string()),
        };
        let angus = price_list(&products, CustomerType::Base, &both);
        assert_eq!(angus.len(), 1);
        assert_eq!(angus[0].display_price, Decimal::new(3650, 2));
    }

    #[test]
    fn test_categories_in_catalog_order() {
        let products = seed_products(Utc::now()).unwrap();
        let categories = categories(&products);
        assert_eq!(categories[0], "POLLO");
        assert_eq!(categories[1], "DESPIECE POLLO DE CORRAL");
        assert_eq!(categories.iter().filter(|c| *c == "HAMBURGUESAS").count(), 1);
    }

    #[test]
    fn test_search_products() {
        let products = seed_products(Utc::now()).unwrap();
        assert_eq!(search_products(&products, "Jamón").len(), 2);
        assert_eq!(search_products(&products, "75226").len(), 1);
        assert!(search_products(&products, "salmon").is_empty());
    }
}
