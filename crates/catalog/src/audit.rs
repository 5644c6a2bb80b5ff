use std::fmt;

use serde::{Deserialize, Serialize};

/// One logged catalog event.
///
/// Records are append-only: written once, never rewritten or deleted.
/// `magnitude` is a unit count for sales and restocks, a percentage for
/// discounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum AuditEvent {
    Sale { name: String, quantity: i64 },
    Discount { name: String, percent: f64 },
    Restock { name: String, quantity: i64 },
}

impl AuditEvent {
    /// Stable discriminator used in the audit line.
    pub fn kind_label(&self) -> &'static str {
        match self {
            AuditEvent::Sale { .. } => "Sale",
            AuditEvent::Discount { .. } => "Discount",
            AuditEvent::Restock { .. } => "Restock",
        }
    }
}

impl fmt::Display for AuditEvent {
    /// Line body after the timestamp, e.g. `Sale - Widget | Quantity: 3`
    /// or `Discount - Widget | Discount: 20%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::Sale { name, quantity } | AuditEvent::Restock { name, quantity } => {
                write!(f, "{} - {} | Quantity: {}", self.kind_label(), name, quantity)
            }
            AuditEvent::Discount { name, percent } => {
                write!(f, "{} - {} | Discount: {}%", self.kind_label(), name, percent)
            }
        }
    }
}
