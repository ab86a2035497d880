//! Bridges the local store to the backend: posting received lines as a
//! goods receipt and pulling a supplier catalog for cost reconciliation.
//!
//! The store's state machine never depends on the network; these functions
//! are the only seams where the two meet.

use rxstock_api::requests::{ReceiveInventoryRequest, ReceiveLine};
use rxstock_api::types::CatalogItem;
use rxstock_api::{ApiClient, ApiError, Endpoint};
use thiserror::Error;
use uuid::Uuid;

use crate::model::ShoppingList;
use crate::reconcile::CostRefreshReport;
use crate::store::{ShoppingListStore, StoreError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("shopping list {0} does not exist")]
    ListNotFound(Uuid),

    #[error("nothing on this list has been received yet")]
    NothingReceived,

    #[error("this list has no supplier to fetch a catalog from")]
    NoSupplier,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Assembles the goods-receipt body from a list's received lines.
///
/// Returns `None` when nothing has been received. Pure; unit-testable
/// without a network.
#[must_use]
pub fn receive_request_for(list: &ShoppingList) -> Option<ReceiveInventoryRequest> {
    let lines: Vec<ReceiveLine> = list
        .items
        .iter()
        .filter(|i| i.is_received && i.received_quantity > 0)
        .map(|i| ReceiveLine {
            product_id: i.product_id.clone(),
            quantity: i.received_quantity,
            unit_cost: i.unit_cost,
            batch_number: i.batch_number.clone(),
            expiry_date: i.expiry_date,
        })
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(ReceiveInventoryRequest {
        supplier_id: list.supplier_id.clone(),
        location_id: list.location_id.clone(),
        invoice_number: list.invoice_number.clone(),
        notes: list.notes.clone(),
        lines,
    })
}

/// Posts the list's received lines to the backend, which turns them into
/// FIFO cost batches server-side.
///
/// # Errors
///
/// - [`SubmitError::ListNotFound`] / [`SubmitError::NothingReceived`].
/// - [`SubmitError::Api`] for any transport or classification failure.
pub async fn submit_receive(
    client: &ApiClient,
    store: &ShoppingListStore,
    list_id: Uuid,
) -> Result<(), SubmitError> {
    let list = store.get(list_id).ok_or(SubmitError::ListNotFound(list_id))?;
    let request = receive_request_for(&list).ok_or(SubmitError::NothingReceived)?;
    client
        .request_empty(&Endpoint::ReceiveInventory, &[], Some(&request))
        .await?;
    Ok(())
}

/// Fetches the list's supplier catalog and reconciles unreceived item
/// costs against it.
///
/// # Errors
///
/// - [`SubmitError::NoSupplier`] when the list has no supplier set.
/// - [`SubmitError::Api`] for fetch failures; the store is untouched then.
pub async fn refresh_costs_from_backend(
    client: &ApiClient,
    store: &ShoppingListStore,
    list_id: Uuid,
) -> Result<CostRefreshReport, SubmitError> {
    let list = store.get(list_id).ok_or(SubmitError::ListNotFound(list_id))?;
    let supplier_id = list.supplier_id.ok_or(SubmitError::NoSupplier)?;

    let catalog: Vec<CatalogItem> = client
        .get(&Endpoint::SupplierCatalog { id: supplier_id }, &[])
        .await?;
    Ok(store.refresh_costs_from_supplier(list_id, &catalog)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewItem;
    use rust_decimal::Decimal;

    fn received_list() -> ShoppingList {
        let mut list = ShoppingList::new("submit me".into(), Some("loc-1".into()), None);
        list.supplier_id = Some("sup-1".into());
        list.invoice_number = Some("INV-3".into());
        let mut received = NewItem {
            product_id: "P1".into(),
            product_name: "Paracetamol".into(),
            sku: None,
            planned_quantity: 5,
            unit_cost: Decimal::new(1000, 2),
            batch_number: Some("B-77".into()),
            expiry_date: None,
            notes: None,
        }
        .into_item();
        received.is_received = true;
        received.received_quantity = 4;
        list.items.push(received);
        list.items.push(
            NewItem {
                product_id: "P2".into(),
                product_name: "Ibuprofen".into(),
                sku: None,
                planned_quantity: 2,
                unit_cost: Decimal::new(700, 2),
                batch_number: None,
                expiry_date: None,
                notes: None,
            }
            .into_item(),
        );
        list
    }

    #[test]
    fn request_contains_only_received_lines() {
        let list = received_list();
        let request = receive_request_for(&list).expect("one line was received");

        assert_eq!(request.supplier_id.as_deref(), Some("sup-1"));
        assert_eq!(request.location_id.as_deref(), Some("loc-1"));
        assert_eq!(request.invoice_number.as_deref(), Some("INV-3"));
        assert_eq!(request.lines.len(), 1);
        let line = &request.lines[0];
        assert_eq!(line.product_id, "P1");
        assert_eq!(line.quantity, 4, "received quantity, not planned");
        assert_eq!(line.batch_number.as_deref(), Some("B-77"));
    }

    #[test]
    fn request_is_none_when_nothing_received() {
        let mut list = received_list();
        for item in &mut list.items {
            item.is_received = false;
            item.received_quantity = 0;
        }
        assert!(receive_request_for(&list).is_none());
    }
}
