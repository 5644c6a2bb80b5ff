use std::collections::BTreeMap;

use tracing::{debug, warn};

use stockbook_core::{CatalogError, CatalogResult};
use stockbook_products::Product;

use crate::audit::AuditEvent;
use crate::sink::{AuditSink, Clock, SnapshotSink};

/// Units added to an entry each time the restock scan picks it up. Fixed
/// for the catalog's lifetime.
pub const RESTOCK_AMOUNT: i64 = 10;

/// The owning collection of products, keyed by name.
///
/// Exactly one entry per name; every listing, restock scan, and snapshot
/// export iterates in key order. Operations take `&mut self`, so the
/// borrow checker is the single serialization point for mutations.
pub struct Catalog {
    products: BTreeMap<String, Product>,
    snapshot: Box<dyn SnapshotSink>,
    audit: Box<dyn AuditSink>,
    clock: Box<dyn Clock>,
}

impl Catalog {
    pub fn new(
        snapshot: impl SnapshotSink + 'static,
        audit: impl AuditSink + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            products: BTreeMap::new(),
            snapshot: Box::new(snapshot),
            audit: Box::new(audit),
            clock: Box::new(clock),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Insert `product` under its name if absent.
    ///
    /// A duplicate name is rejected and the existing entry preserved: this
    /// is an idempotence guard, not an update or merge.
    pub fn add_product(&mut self, product: Product) -> CatalogResult<()> {
        let name = product.name().to_string();
        if self.products.contains_key(&name) {
            return Err(CatalogError::duplicate(name));
        }
        debug!(%name, kind = product.kind_label(), "product added");
        self.products.insert(name, product);
        Ok(())
    }

    /// Lazy, restartable sequence of per-product descriptions in key
    /// order.
    pub fn list_all(&self) -> impl Iterator<Item = String> + '_ {
        self.products.values().map(Product::describe)
    }

    /// Sell `quantity` units of `name`.
    ///
    /// Appends a Sale audit record only when the sale goes through; a
    /// missing product or insufficient stock writes nothing.
    pub fn sell(&mut self, name: &str, quantity: i64) -> CatalogResult<()> {
        let product = self
            .products
            .get_mut(name)
            .ok_or_else(|| CatalogError::not_found(name))?;
        if !product.try_sell(quantity) {
            return Err(CatalogError::InsufficientStock {
                name: name.to_string(),
                requested: quantity,
                available: product.stock(),
            });
        }
        debug!(name, quantity, "sale applied");
        self.record_event(AuditEvent::Sale {
            name: name.to_string(),
            quantity,
        });
        Ok(())
    }

    /// Apply a percentage discount to `name` and append a Discount audit
    /// record.
    ///
    /// The percentage is applied unconditionally; range checking belongs
    /// to the interactive layer upstream.
    pub fn discount(&mut self, name: &str, percent: f64) -> CatalogResult<()> {
        let product = self
            .products
            .get_mut(name)
            .ok_or_else(|| CatalogError::not_found(name))?;
        product.apply_discount_percent(percent);
        debug!(name, percent, "discount applied");
        self.record_event(AuditEvent::Discount {
            name: name.to_string(),
            percent,
        });
        Ok(())
    }

    /// Restock every product whose pre-call stock is strictly below
    /// `threshold` by [`RESTOCK_AMOUNT`] units, appending one Restock
    /// audit record each.
    ///
    /// Returns the restocked names in key order so the caller can report
    /// them. Eligibility is decided against the stock levels committed
    /// before this call began; restocking one entry never changes whether
    /// another qualifies.
    pub fn check_and_restock(&mut self, threshold: i64) -> Vec<String> {
        let low: Vec<String> = self
            .products
            .iter()
            .filter(|(_, product)| product.stock() < threshold)
            .map(|(name, _)| name.clone())
            .collect();
        for name in &low {
            if let Some(product) = self.products.get_mut(name) {
                product.adjust_stock(RESTOCK_AMOUNT);
            }
            debug!(%name, amount = RESTOCK_AMOUNT, "restocked");
            self.record_event(AuditEvent::Restock {
                name: name.clone(),
                quantity: RESTOCK_AMOUNT,
            });
        }
        low
    }

    /// Write one line per product to the snapshot sink, fully replacing
    /// any prior snapshot.
    ///
    /// Line format: `<name> | <kind_label> | <stock> | `. Sink failures
    /// are logged and swallowed; exporting never aborts the session.
    pub fn export_snapshot(&mut self) {
        let lines: Vec<String> = self
            .products
            .values()
            .map(|p| format!("{} | {} | {} | ", p.name(), p.kind_label(), p.stock()))
            .collect();
        if let Err(err) = self.snapshot.overwrite(&lines) {
            warn!(%err, "snapshot export failed");
        }
    }

    /// Append one timestamped line to the audit sink.
    ///
    /// Never fails observably: sink errors are logged and swallowed so a
    /// logging problem cannot abort a business operation.
    pub fn record_event(&mut self, event: AuditEvent) {
        let line = format!("{} {}", self.clock.timestamp(), event);
        if let Err(err) = self.audit.append(&line) {
            warn!(%err, kind = event.kind_label(), "audit append failed");
        }
    }
}
