//! Shopping list aggregate and its derived state.
//!
//! A list moves `Draft → Ready → PartiallyReceived → Completed`, with
//! `Ready → Draft` (reopen) as the only backward transition. Receiving
//! never sets the status directly: it is recomputed from the items after
//! every receive, so the status can never disagree with the item flags.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rxstock_core::money::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListStatus {
    Draft,
    Ready,
    PartiallyReceived,
    Completed,
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListStatus::Draft => write!(f, "draft"),
            ListStatus::Ready => write!(f, "ready"),
            ListStatus::PartiallyReceived => write!(f, "partially received"),
            ListStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One planned purchase line. Owned by exactly one [`ShoppingList`]; items
/// have no lifecycle of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Always at least 1; edits clamp rather than reject.
    pub planned_quantity: u32,
    pub unit_cost: Money,
    /// Set whenever `unit_cost` is overwritten, by reconciliation or by a
    /// manual edit. Drives the "cost changed" indicator.
    #[serde(default)]
    pub previous_cost: Option<Money>,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_received: bool,
    /// Meaningful only once `is_received` is true. May differ from
    /// `planned_quantity`; partial receives are first-class.
    #[serde(default)]
    pub received_quantity: u32,
}

/// Fields for a new item. The store assigns the id and the received flags.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub product_id: String,
    pub product_name: String,
    pub sku: Option<String>,
    pub planned_quantity: u32,
    pub unit_cost: Money,
    pub batch_number: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl NewItem {
    pub(crate) fn into_item(self) -> ShoppingListItem {
        ShoppingListItem {
            id: Uuid::new_v4(),
            product_id: self.product_id,
            product_name: self.product_name,
            sku: self.sku,
            planned_quantity: self.planned_quantity.max(1),
            unit_cost: self.unit_cost,
            previous_cost: None,
            batch_number: self.batch_number,
            expiry_date: self.expiry_date,
            notes: self.notes,
            is_received: false,
            received_quantity: 0,
        }
    }
}

/// Field-level edit of one unreceived item. `Some` replaces the field.
#[derive(Debug, Clone, Default)]
pub struct ItemEdit {
    pub planned_quantity: Option<u32>,
    pub unit_cost: Option<Money>,
    pub batch_number: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Edit of the list's own attributes. `Some` replaces the field.
#[derive(Debug, Clone, Default)]
pub struct ListDetailsEdit {
    pub name: Option<String>,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    pub invoice_number: Option<String>,
    pub notes: Option<String>,
}

/// The principal local aggregate: a planned purchase from one supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub status: ListStatus,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Insertion order. Received items stay in place, rendered
    /// struck-through by the UI.
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub(crate) fn new(
        name: String,
        location_id: Option<String>,
        location_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            status: ListStatus::Draft,
            supplier_id: None,
            supplier_name: None,
            location_id,
            location_name,
            invoice_number: None,
            notes: None,
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn received_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_received).count()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|i| !i.is_received).count()
    }

    /// Σ planned quantity × unit cost over all items, received included.
    #[must_use]
    pub fn planned_total(&self) -> Money {
        self.items
            .iter()
            .map(|i| Decimal::from(i.planned_quantity) * i.unit_cost)
            .sum()
    }

    /// Structural edits (name, supplier, add/remove items) are allowed only
    /// in the pre-order statuses.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self.status, ListStatus::Draft | ListStatus::Ready)
    }

    /// Draft lists are not receivable; readiness must be declared first.
    #[must_use]
    pub fn can_receive(&self) -> bool {
        matches!(
            self.status,
            ListStatus::Ready | ListStatus::PartiallyReceived
        ) && self.pending_count() > 0
    }

    /// Items whose cost was overwritten since they were added.
    #[must_use]
    pub fn items_with_cost_changes(&self) -> Vec<&ShoppingListItem> {
        self.items
            .iter()
            .filter(|i| i.previous_cost.is_some())
            .collect()
    }

    /// Re-derives the status from the item flags after a receive.
    ///
    /// Completed iff every item is received (and there is at least one);
    /// partially received iff some but not all are; otherwise unchanged.
    pub(crate) fn recompute_status(&mut self) {
        let received = self.received_count();
        let total = self.item_count();
        if total > 0 && received == total {
            self.status = ListStatus::Completed;
        } else if received > 0 {
            self.status = ListStatus::PartiallyReceived;
        }
    }

    /// A fresh draft copy: same supplier/location/notes and items, with all
    /// receive state and cost-change markers cleared.
    #[must_use]
    pub(crate) fn duplicated_as(&self, new_name: String) -> Self {
        let items = self
            .items
            .iter()
            .map(|i| ShoppingListItem {
                id: Uuid::new_v4(),
                previous_cost: None,
                is_received: false,
                received_quantity: 0,
                ..i.clone()
            })
            .collect();
        Self {
            id: Uuid::new_v4(),
            name: new_name,
            status: ListStatus::Draft,
            supplier_id: self.supplier_id.clone(),
            supplier_name: self.supplier_name.clone(),
            location_id: self.location_id.clone(),
            location_name: self.location_name.clone(),
            invoice_number: None,
            notes: self.notes.clone(),
            created_at: Utc::now(),
            items,
        }
    }
}
