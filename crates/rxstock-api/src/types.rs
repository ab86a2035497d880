//! Response types for the inventory backend.
//!
//! All types model the JSON the NestJS backend returns, camelCase on the
//! wire, dates as ISO-8601 strings. These are read-only DTOs: the shopping
//! list store joins against them but never mutates them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Generic page wrapper used by the list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Whether another page exists after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub selling_price: Decimal,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub reorder_level: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// One row of a supplier's price catalog. The shopping list cost
/// reconciliation joins list items to these by `product_id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// The supplier's most recent unit cost for this product.
    pub last_cost: Decimal,
    pub current_stock: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Headline numbers for the dashboard screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub total_products: u64,
    pub low_stock_count: u64,
    pub expiring_soon_count: u64,
    pub inventory_value: Decimal,
    #[serde(default)]
    pub sales_today: Option<Decimal>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

/// One bucket of the server-computed stock aging report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingBucket {
    pub label: String,
    pub days_min: u32,
    #[serde(default)]
    pub days_max: Option<u32>,
    pub quantity: i64,
    pub value: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub product_id: String,
    pub product_name: String,
    pub current_stock: i64,
    pub reorder_level: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringProduct {
    pub product_id: String,
    pub product_name: String,
    pub batch_number: String,
    pub expiry_date: DateTime<Utc>,
    pub quantity: i64,
}

/// A completed goods-receipt recorded server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiving {
    pub id: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub total_cost: Decimal,
    pub received_at: DateTime<Utc>,
    pub line_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity_change: i64,
    pub reason: String,
    pub adjusted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub incurred_at: DateTime<Utc>,
}
