//! Supplier cost reconciliation.
//!
//! Overwrites planned unit costs with the supplier's current catalog
//! prices. Received items are never touched: the historical cost of a
//! completed purchase is immutable. The operation is partial by design —
//! items the supplier does not price are counted, not failed.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rxstock_api::types::CatalogItem;
use rxstock_core::money::{cost_epsilon, percent_change, Money};

use crate::model::ShoppingList;

/// One applied cost change, for display in the refresh summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostChange {
    pub product_name: String,
    pub old_cost: Money,
    pub new_cost: Money,
    /// Percentage value, e.g. 20.0 for 10.00 → 12.00. Zero when the old
    /// cost was zero.
    pub percent_change: Decimal,
    pub is_increase: bool,
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct CostRefreshReport {
    pub updated_count: usize,
    pub not_found_count: usize,
    pub changes: Vec<CostChange>,
}

/// Applies the supplier's catalog prices to every unreceived item.
///
/// On duplicate product ids in the catalog the first occurrence wins, so
/// the pass is deterministic regardless of catalog ordering quirks. A cost
/// difference within the epsilon is rounding noise and is left alone,
/// which also makes the pass idempotent: a second run against the same
/// catalog updates nothing.
pub fn refresh_costs(list: &mut ShoppingList, catalog: &[CatalogItem]) -> CostRefreshReport {
    let mut costs_by_product: HashMap<&str, Money> = HashMap::new();
    for entry in catalog {
        costs_by_product
            .entry(entry.product_id.as_str())
            .or_insert(entry.last_cost);
    }

    let epsilon = cost_epsilon();
    let mut report = CostRefreshReport::default();

    for item in &mut list.items {
        if item.is_received {
            continue;
        }
        let Some(&supplier_cost) = costs_by_product.get(item.product_id.as_str()) else {
            report.not_found_count += 1;
            continue;
        };
        let old_cost = item.unit_cost;
        if (supplier_cost - old_cost).abs() <= epsilon {
            continue;
        }

        item.previous_cost = Some(old_cost);
        item.unit_cost = supplier_cost;
        report.updated_count += 1;
        report.changes.push(CostChange {
            product_name: item.product_name.clone(),
            old_cost,
            new_cost: supplier_cost,
            percent_change: percent_change(old_cost, supplier_cost),
            is_increase: supplier_cost > old_cost,
        });
    }

    report
}
