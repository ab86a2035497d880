//! Request bodies, one dedicated struct per mutating operation.
//!
//! Shapes mirror the backend's expected JSON exactly: camelCase keys,
//! ISO-8601 dates, decimal amounts as strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateDeviceRequest {
    pub activation_code: String,
    pub device_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinLoginRequest {
    pub employee_id: String,
    pub pin: String,
}

/// One received line within a goods receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveLine {
    pub product_id: String,
    pub quantity: u32,
    pub unit_cost: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Posts a goods receipt that the backend turns into FIFO cost batches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveInventoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub lines: Vec<ReceiveLine>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdjustmentRequest {
    pub product_id: String,
    pub quantity_change: i64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    pub product_id: String,
    pub quantity: u32,
    pub from_location_id: String,
    pub to_location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub incurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub selling_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub role: String,
    pub pin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

/// Publishes a locally-drafted shopping list as a purchase intent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitShoppingListRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    pub lines: Vec<ReceiveLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receive_request_serializes_camel_case_and_skips_absent_fields() {
        let request = ReceiveInventoryRequest {
            supplier_id: Some("sup-1".into()),
            location_id: None,
            invoice_number: Some("INV-7".into()),
            notes: None,
            lines: vec![ReceiveLine {
                product_id: "P1".into(),
                quantity: 5,
                unit_cost: Decimal::new(1000, 2),
                batch_number: None,
                expiry_date: None,
            }],
        };
        let json = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(json["supplierId"], "sup-1");
        assert_eq!(json["invoiceNumber"], "INV-7");
        assert!(json.get("locationId").is_none());
        assert_eq!(json["lines"][0]["productId"], "P1");
        assert_eq!(json["lines"][0]["unitCost"], "10.00");
    }

    #[test]
    fn expense_dates_serialize_as_iso_8601() {
        use chrono::TimeZone;
        let request = CreateExpenseRequest {
            description: "Fridge repair".into(),
            amount: Decimal::new(7500, 2),
            category: "maintenance".into(),
            incurred_at: Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(&request).expect("should serialize");
        let raw = json["incurredAt"].as_str().expect("date should be a string");
        assert!(raw.starts_with("2025-03-10T14:30:00"), "got {raw}");
    }
}
