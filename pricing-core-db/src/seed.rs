//! Initial product catalog.
//!
//! List prices are given as in the supplier price sheet, with a comma decimal
//! separator, and already include the 30% reference margin.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::product::ProductModel;

/// One row of the supplier price sheet.
#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub list_price: &'static str,
}

const fn row(
    code: &'static str,
    name: &'static str,
    category: &'static str,
    list_price: &'static str,
) -> SeedProduct {
    SeedProduct {
        code,
        name,
        category,
        list_price,
    }
}

pub const SEED_CATALOG: &[SeedProduct] = &[
    row("68008", "ALAS POLLO FRESCO", "POLLO", "2,89"),
    row("68003", "PECHUGA DE POLLO FRESCA ENTERA", "POLLO", "5,79"),
    row("68028", "PECHUGA DE POLLO FRESCA FILETEADA", "POLLO", "6,40"),
    row("68001", "POLLO PRIMERA FRESCO", "POLLO", "3,95"),
    row("68044", "FILETE PECHUGA CORRAL", "DESPIECE POLLO DE CORRAL", "7,90"),
    row("14044", "KEBAB TERNERA CONGELADO ROLLO 10KG", "ESPECIAL KEBAB", "5,20"),
    row("63039", "CHULETAS CORDERO FRESCAS", "CORDERO RECENTAL", "19,50"),
    row("63013", "CARRET LECHAL FRESCO", "CORDERO LECHAL", "28,50"),
    row("65025", "CHULETAS CERDO FRESCAS", "CERDO Y DESPIECE FRESCO", "4,90"),
    row("65006", "SOLOMILLO CERDO FRESCO", "CERDO Y DESPIECE FRESCO", "6,90"),
    row("65046", "HAMBURGUESA CERDO FRESCA", "HAMBURGUESAS", "5,90"),
    row("68031", "HAMBURGUESA POLLO FRESCA", "HAMBURGUESAS", "6,90"),
    row("71018", "HAMBURGUESA DE VACA", "HAMBURGUESAS", "11,50"),
    row("67070", "HAMBURGUESA ANGUS", "HAMBURGUESAS", "12,50"),
    row("65051", "CINTA DE LOMO", "CERDO IBÉRICO FRESCO", "28,90"),
    row("67062", "CHULETON AÑOJO FRESCO", "AÑOJO Y DESPIECE FRESCO", "18,90"),
    row("67122", "SOLOMILLO AÑOJO FRESCO +3", "AÑOJO Y DESPIECE FRESCO", "30,50"),
    row("67053", "LOMO ALTO ANGUS", "ANGUS", "28,90"),
    row("66105", "SOLOMILLO", "ANGUS", "36,50"),
    row("70021", "ENTRECOT BLANCO", "TERNERA BLANCA", "26,50"),
    row("71057", "SOLOMILLO BLANCO", "TERNERA BLANCA", "33,40"),
    row("71020", "ENTRECOT", "VACUNO", "18,50"),
    row("41008", "PECHUGA POLLO", "POLLO CONGELADO", "5,70"),
    row("30068", "PATATAS 3/8", "PATATAS", "1,95"),
    row("20321", "COLA LANGOSTINO 31/35", "LANGOSTINOS CONGELADOS", "7,90"),
    row("12011", "SOLOMILLO CERDO", "CERDO CONGELADO", "6,90"),
    row("12086", "CARRET COCHINILLO", "COCHINILLO CONGELADO", "18,50"),
    row("75059", "JAMÓN IBÉRICO BELLOTA", "EMBUTIDOS", "49,50"),
    row("75372", "JAMÓN IBÉRICO LONCHEADO", "EMBUTIDOS", "72,40"),
    row("75226", "QUESO CURADO MEZCLA", "QUESOS", "9,95"),
    row("67116", "HUEVOS FRESCOS L", "HUEVOS", "2,95"),
];

impl SeedProduct {
    /// List price parsed from its comma-decimal text.
    pub fn parsed_list_price(&self) -> Result<Decimal, String> {
        Decimal::from_str(&self.list_price.replace(',', "."))
            .map_err(|e| format!("Invalid list price '{}' for product {}: {e}", self.list_price, self.code))
    }

    pub fn to_product(&self, now: DateTime<Utc>) -> Result<ProductModel, String> {
        ProductModel::from_list_price(
            self.code,
            self.name,
            self.category,
            self.parsed_list_price()?,
            now,
        )
    }
}

/// Build the seed catalog, in sheet order, all created at `now`.
pub fn seed_products(now: DateTime<Utc>) -> Result<Vec<ProductModel>, String> {
    SEED_CATALOG.iter().map(|seed| seed.to_product(now)).collect()
}
