//! The authoritative local store of shopping lists.
//!
//! All mutation methods run start-to-finish under one mutex, so no two
//! mutations ever interleave — the same guarantee a single-threaded UI
//! scheduler gives for free. Each successful mutation bumps a version
//! counter and saves the whole collection; consumers poll `version` and
//! take a fresh `snapshot` to re-render.
//!
//! Invalid ids and invalid states are explicit [`StoreError`]s rather than
//! silent no-ops, which keeps the contract testable.

use std::sync::{Mutex, PoisonError};

use rxstock_api::types::CatalogItem;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{
    ItemEdit, ListDetailsEdit, ListStatus, NewItem, ShoppingList, ShoppingListItem,
};
use crate::persist::{ListPersister, PersistError};
use crate::reconcile::{refresh_costs, CostRefreshReport};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("shopping list {0} does not exist")]
    ListNotFound(Uuid),

    #[error("item {0} does not exist on this list")]
    ItemNotFound(Uuid),

    #[error("list {list_id} is {status} and cannot be edited")]
    NotEditable { list_id: Uuid, status: ListStatus },

    #[error("list {list_id} is {status} and cannot be received")]
    NotReceivable { list_id: Uuid, status: ListStatus },

    #[error("cannot move a {from} list to {to}")]
    InvalidTransition { from: ListStatus, to: ListStatus },

    #[error("item {0} has already been received")]
    ItemAlreadyReceived(Uuid),

    #[error("a shopping list needs a non-empty name")]
    EmptyName,

    #[error(transparent)]
    Persist(#[from] PersistError),
}

struct Inner {
    lists: Vec<ShoppingList>,
    version: u64,
    persister: Box<dyn ListPersister>,
}

/// Owns the local shopping list collection and enforces the lifecycle
/// rules. Construct one per process and share it behind an `Arc`.
pub struct ShoppingListStore {
    inner: Mutex<Inner>,
}

impl ShoppingListStore {
    /// Loads the collection from the persister. Load failures are logged
    /// and start the store empty — availability over strictness, the
    /// backend is the system of record.
    #[must_use]
    pub fn new(persister: Box<dyn ListPersister>) -> Self {
        let lists = persister.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load shopping lists; starting empty");
            Vec::new()
        });
        Self {
            inner: Mutex::new(Inner {
                lists,
                version: 0,
                persister,
            }),
        }
    }

    /// Current state of every list, in creation order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ShoppingList> {
        self.lock().lists.clone()
    }

    /// Monotonic counter, bumped by every successful mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    #[must_use]
    pub fn get(&self, list_id: Uuid) -> Option<ShoppingList> {
        self.lock().lists.iter().find(|l| l.id == list_id).cloned()
    }

    /// Creates a new draft list.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyName`] for a blank name.
    /// - [`StoreError::Persist`] if the save fails.
    pub fn create(
        &self,
        name: &str,
        location_id: Option<String>,
        location_name: Option<String>,
    ) -> Result<ShoppingList, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let list = ShoppingList::new(name.to_owned(), location_id, location_name);
        let created = list.clone();
        self.mutate(move |lists| {
            lists.push(list);
            Ok(())
        })?;
        Ok(created)
    }

    /// Edits the list's own attributes (name, supplier, invoice, notes).
    ///
    /// # Errors
    ///
    /// - [`StoreError::ListNotFound`] for an unknown id.
    /// - [`StoreError::NotEditable`] once receiving has started.
    /// - [`StoreError::EmptyName`] if the edit would blank the name.
    pub fn update_details(&self, list_id: Uuid, edit: ListDetailsEdit) -> Result<(), StoreError> {
        if let Some(name) = &edit.name {
            if name.trim().is_empty() {
                return Err(StoreError::EmptyName);
            }
        }
        self.mutate(|lists| {
            let list = editable_list(lists, list_id)?;
            if let Some(name) = edit.name {
                list.name = name.trim().to_owned();
            }
            if let Some(supplier_id) = edit.supplier_id {
                list.supplier_id = Some(supplier_id);
            }
            if let Some(supplier_name) = edit.supplier_name {
                list.supplier_name = Some(supplier_name);
            }
            if let Some(invoice_number) = edit.invoice_number {
                list.invoice_number = Some(invoice_number);
            }
            if let Some(notes) = edit.notes {
                list.notes = Some(notes);
            }
            Ok(())
        })
    }

    /// Declares a draft list ready to order.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidTransition`] from any status but draft.
    pub fn mark_ready(&self, list_id: Uuid) -> Result<(), StoreError> {
        self.transition(list_id, ListStatus::Draft, ListStatus::Ready)
    }

    /// Reopens a ready list for drafting — the only backward transition.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidTransition`] from any status but ready.
    pub fn reopen(&self, list_id: Uuid) -> Result<(), StoreError> {
        self.transition(list_id, ListStatus::Ready, ListStatus::Draft)
    }

    /// Appends an item. A product may appear on several lines; lines are
    /// not merged by product id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ListNotFound`] / [`StoreError::NotEditable`].
    pub fn add_item(&self, list_id: Uuid, new_item: NewItem) -> Result<Uuid, StoreError> {
        let item = new_item.into_item();
        let item_id = item.id;
        self.mutate(move |lists| {
            let list = editable_list(lists, list_id)?;
            list.items.push(item);
            Ok(())
        })?;
        Ok(item_id)
    }

    /// Removes items by position. Out-of-range positions are ignored;
    /// received items are skipped — they are excluded from editing paths
    /// and stay visible on the list.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ListNotFound`] / [`StoreError::NotEditable`].
    pub fn remove_items(&self, list_id: Uuid, indices: &[usize]) -> Result<(), StoreError> {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        self.mutate(|lists| {
            let list = editable_list(lists, list_id)?;
            for index in sorted.into_iter().rev() {
                if index >= list.items.len() || list.items[index].is_received {
                    continue;
                }
                list.items.remove(index);
            }
            Ok(())
        })
    }

    /// Applies a field-level edit to one unreceived item. Quantity edits
    /// clamp to at least 1; a cost edit records the prior value as
    /// `previous_cost`, the same rule reconciliation follows.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ListNotFound`] / [`StoreError::ItemNotFound`].
    /// - [`StoreError::NotEditable`] on a completed list.
    /// - [`StoreError::ItemAlreadyReceived`] for a received item.
    pub fn update_item(
        &self,
        list_id: Uuid,
        item_id: Uuid,
        edit: ItemEdit,
    ) -> Result<(), StoreError> {
        self.mutate(|lists| {
            let list = find_list(lists, list_id)?;
            // Unreceived items stay editable while the list is partially
            // received; only completion freezes them all.
            if list.status == ListStatus::Completed {
                return Err(StoreError::NotEditable {
                    list_id,
                    status: list.status,
                });
            }
            let item = find_item(list, item_id)?;
            if item.is_received {
                return Err(StoreError::ItemAlreadyReceived(item_id));
            }
            if let Some(quantity) = edit.planned_quantity {
                item.planned_quantity = quantity.max(1);
            }
            if let Some(unit_cost) = edit.unit_cost {
                if unit_cost != item.unit_cost {
                    item.previous_cost = Some(item.unit_cost);
                    item.unit_cost = unit_cost;
                }
            }
            if let Some(batch_number) = edit.batch_number {
                item.batch_number = Some(batch_number);
            }
            if let Some(expiry_date) = edit.expiry_date {
                item.expiry_date = Some(expiry_date);
            }
            if let Some(notes) = edit.notes {
                item.notes = Some(notes);
            }
            Ok(())
        })
    }

    /// Marks one item received and re-derives the list status. The
    /// received quantity may differ from the planned quantity.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotReceivable`] unless the list is ready or
    ///   partially received with pending items.
    /// - [`StoreError::ItemAlreadyReceived`] on a second receive.
    pub fn mark_item_received(
        &self,
        list_id: Uuid,
        item_id: Uuid,
        received_quantity: u32,
    ) -> Result<(), StoreError> {
        self.mutate(|lists| {
            let list = find_list(lists, list_id)?;
            if !list.can_receive() {
                return Err(StoreError::NotReceivable {
                    list_id,
                    status: list.status,
                });
            }
            let item = find_item(list, item_id)?;
            if item.is_received {
                return Err(StoreError::ItemAlreadyReceived(item_id));
            }
            item.is_received = true;
            item.received_quantity = received_quantity;
            list.recompute_status();
            Ok(())
        })
    }

    /// Creates a fresh draft copy of a list, receive state and cost-change
    /// markers cleared.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ListNotFound`] / [`StoreError::EmptyName`].
    pub fn duplicate(&self, list_id: Uuid, new_name: &str) -> Result<ShoppingList, StoreError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.mutate(|lists| {
            let original = find_list(lists, list_id)?;
            let copy = original.duplicated_as(new_name.to_owned());
            let created = copy.clone();
            lists.push(copy);
            Ok(created)
        })
    }

    /// Deletes a list outright.
    ///
    /// # Errors
    ///
    /// [`StoreError::ListNotFound`] for an unknown id.
    pub fn delete(&self, list_id: Uuid) -> Result<(), StoreError> {
        self.mutate(|lists| {
            let before = lists.len();
            lists.retain(|l| l.id != list_id);
            if lists.len() == before {
                return Err(StoreError::ListNotFound(list_id));
            }
            Ok(())
        })
    }

    /// Reconciles unreceived item costs against a supplier catalog. Partial
    /// application is correct: unknown products are counted, not failed.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ListNotFound`] / [`StoreError::Persist`].
    pub fn refresh_costs_from_supplier(
        &self,
        list_id: Uuid,
        catalog: &[CatalogItem],
    ) -> Result<CostRefreshReport, StoreError> {
        self.mutate(|lists| {
            let list = find_list(lists, list_id)?;
            Ok(refresh_costs(list, catalog))
        })
    }

    fn transition(&self, list_id: Uuid, from: ListStatus, to: ListStatus) -> Result<(), StoreError> {
        self.mutate(|lists| {
            let list = find_list(lists, list_id)?;
            if list.status != from {
                return Err(StoreError::InvalidTransition {
                    from: list.status,
                    to,
                });
            }
            list.status = to;
            Ok(())
        })
    }

    /// Runs one mutation atomically: apply, bump the version, save the
    /// whole collection. A failed save still returns the error, but the
    /// in-memory state keeps the mutation — the UI must never lose the
    /// user's edit over a disk hiccup.
    fn mutate<R>(
        &self,
        apply: impl FnOnce(&mut Vec<ShoppingList>) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let mut inner = self.lock();
        let result = apply(&mut inner.lists)?;
        inner.version += 1;
        let lists = &inner.lists;
        if let Err(e) = inner.persister.save(lists) {
            tracing::warn!(error = %e, "failed to persist shopping lists");
            return Err(e.into());
        }
        Ok(result)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_list(lists: &mut [ShoppingList], list_id: Uuid) -> Result<&mut ShoppingList, StoreError> {
    lists
        .iter_mut()
        .find(|l| l.id == list_id)
        .ok_or(StoreError::ListNotFound(list_id))
}

fn editable_list(
    lists: &mut [ShoppingList],
    list_id: Uuid,
) -> Result<&mut ShoppingList, StoreError> {
    let list = find_list(lists, list_id)?;
    if !list.is_editable() {
        return Err(StoreError::NotEditable {
            list_id,
            status: list.status,
        });
    }
    Ok(list)
}

fn find_item(
    list: &mut ShoppingList,
    item_id: Uuid,
) -> Result<&mut ShoppingListItem, StoreError> {
    list.items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or(StoreError::ItemNotFound(item_id))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
