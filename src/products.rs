//! `/api/product`: a fixed placeholder catalogue.

use serde::Serialize;

use crate::request::Request;
use crate::response::Json;

/// A catalogue entry. Prices are decimal strings.
#[derive(Debug, Serialize)]
pub struct Product {
    pub id: u32,
    pub product: &'static str,
    pub price: &'static str,
}

const CATALOGUE: &[Product] = &[Product { id: 12, product: "Chicken", price: "6.75" }];

/// `GET /api/product`
pub async fn list_products<S>(_req: Request, _state: S) -> Json<&'static [Product]> {
    Json(CATALOGUE)
}
