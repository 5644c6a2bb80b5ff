use serde::{Deserialize, Serialize};

/// Kind-specific attribute of a catalog entry.
///
/// A closed set: adding a kind is one new variant plus its `match` arms,
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    /// Durable goods carrying a warranty period.
    Durable { warranty_months: u32 },
    /// Perishable goods carrying an expiration date. The date is an opaque
    /// string; the domain never parses it.
    Perishable { expiration_date: String },
}

/// One catalog entry: shared fields plus the kind-specific attribute.
///
/// `name` is the identity key and never changes after construction.
/// `price` and `stock` are the only fields mutated post-construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
    stock: i64,
    kind: ProductKind,
}

impl Product {
    /// Create a durable entry with its warranty period in months.
    pub fn durable(
        name: impl Into<String>,
        price: f64,
        stock: i64,
        warranty_months: u32,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            kind: ProductKind::Durable { warranty_months },
        }
    }

    /// Create a perishable entry with its expiration date.
    pub fn perishable(
        name: impl Into<String>,
        price: f64,
        stock: i64,
        expiration_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            kind: ProductKind::Perishable {
                expiration_date: expiration_date.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Stable discriminator used in snapshots and displays.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ProductKind::Durable { .. } => "Electronics",
            ProductKind::Perishable { .. } => "Food",
        }
    }

    /// Human-readable summary including the kind-specific field.
    pub fn describe(&self) -> String {
        let base = format!(
            "Product Name: {}, Price: ${}, Stock Quantity: {}",
            self.name, self.price, self.stock
        );
        match &self.kind {
            ProductKind::Durable { warranty_months } => {
                format!("{base}, Warranty Period: {warranty_months} months")
            }
            ProductKind::Perishable { expiration_date } => {
                format!("{base}, Expiration Date: {expiration_date}")
            }
        }
    }

    /// Reduce `price` by `percent` of itself.
    ///
    /// No range check at this layer: interactive input is validated
    /// upstream, and a percentage above 100 drives the price negative
    /// (retained behavior, flagged for product owners).
    pub fn apply_discount_percent(&mut self, percent: f64) {
        self.price -= self.price * (percent / 100.0);
    }

    /// Unguarded stock adjustment. Restocks pass a positive delta; the
    /// only guarded decrement path is [`Product::try_sell`].
    pub fn adjust_stock(&mut self, delta: i64) {
        self.stock += delta;
    }

    /// Decrement stock by `quantity` if enough units are on hand.
    ///
    /// A failed sale leaves stock untouched; a successful one never takes
    /// it below zero.
    pub fn try_sell(&mut self, quantity: i64) -> bool {
        if self.stock >= quantity {
            self.stock -= quantity;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_sell_decrements_when_stock_suffices() {
        let mut product = Product::durable("Laptop", 999.0, 5, 24);
        assert!(product.try_sell(3));
        assert_eq!(product.stock(), 2);
    }

    #[test]
    fn try_sell_leaves_stock_unchanged_on_failure() {
        let mut product = Product::durable("Laptop", 999.0, 2, 24);
        assert!(!product.try_sell(3));
        assert_eq!(product.stock(), 2);
    }

    #[test]
    fn try_sell_can_deplete_stock_to_exactly_zero() {
        let mut product = Product::perishable("Milk", 3.5, 4, "2025-06-01");
        assert!(product.try_sell(4));
        assert_eq!(product.stock(), 0);
        assert!(!product.try_sell(1));
    }

    #[test]
    fn adjust_stock_accepts_positive_and_negative_deltas() {
        let mut product = Product::durable("Phone", 500.0, 10, 12);
        product.adjust_stock(10);
        assert_eq!(product.stock(), 20);
        product.adjust_stock(-5);
        assert_eq!(product.stock(), 15);
    }

    #[test]
    fn discount_of_twenty_percent_takes_price_from_100_to_80() {
        let mut product = Product::durable("Gadget", 100.0, 1, 6);
        product.apply_discount_percent(20.0);
        assert_eq!(product.price(), 80.0);
    }

    #[test]
    fn discount_above_hundred_drives_price_negative() {
        // Retained behavior: the domain never clamps the percentage.
        let mut product = Product::durable("Gadget", 100.0, 1, 6);
        product.apply_discount_percent(150.0);
        assert_eq!(product.price(), -50.0);
    }

    #[test]
    fn negative_discount_raises_price() {
        let mut product = Product::perishable("Cheese", 10.0, 1, "2025-01-01");
        product.apply_discount_percent(-50.0);
        assert_eq!(product.price(), 15.0);
    }

    #[test]
    fn kind_labels_are_stable() {
        let durable = Product::durable("TV", 300.0, 1, 36);
        let perishable = Product::perishable("Bread", 2.0, 1, "2025-03-01");
        assert_eq!(durable.kind_label(), "Electronics");
        assert_eq!(perishable.kind_label(), "Food");
    }

    #[test]
    fn describe_includes_the_kind_specific_field() {
        let durable = Product::durable("TV", 300.0, 2, 36);
        assert_eq!(
            durable.describe(),
            "Product Name: TV, Price: $300, Stock Quantity: 2, Warranty Period: 36 months"
        );

        let perishable = Product::perishable("Bread", 2.5, 8, "2025-03-01");
        assert_eq!(
            perishable.describe(),
            "Product Name: Bread, Price: $2.5, Stock Quantity: 8, Expiration Date: 2025-03-01"
        );
    }

    #[test]
    fn kind_serializes_with_a_stable_tag() {
        let product = Product::durable("TV", 300.0, 2, 36);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["kind"]["kind"], "durable");
        assert_eq!(json["kind"]["warranty_months"], 36);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: no sequence of sale attempts drives stock negative.
            #[test]
            fn sales_never_drive_stock_negative(
                initial in 0i64..1000,
                requests in proptest::collection::vec(1i64..100, 0..50)
            ) {
                let mut product = Product::durable("Widget", 10.0, initial, 12);
                for quantity in requests {
                    let before = product.stock();
                    let sold = product.try_sell(quantity);
                    if sold {
                        prop_assert_eq!(product.stock(), before - quantity);
                    } else {
                        prop_assert_eq!(product.stock(), before);
                    }
                    prop_assert!(product.stock() >= 0);
                }
            }

            /// Property: a sale succeeds exactly when stock covers it.
            #[test]
            fn sale_outcome_matches_available_stock(
                initial in 0i64..1000,
                quantity in 1i64..1000
            ) {
                let mut product = Product::perishable("Yogurt", 1.0, initial, "2025-01-01");
                let sold = product.try_sell(quantity);
                prop_assert_eq!(sold, initial >= quantity);
            }

            /// Property: discounting never touches name, stock, or kind.
            #[test]
            fn discount_only_touches_price(percent in -200.0f64..200.0) {
                let mut product = Product::durable("Widget", 50.0, 7, 12);
                let expected = 50.0 - 50.0 * (percent / 100.0);
                product.apply_discount_percent(percent);
                prop_assert_eq!(product.price(), expected);
                prop_assert_eq!(product.name(), "Widget");
                prop_assert_eq!(product.stock(), 7);
            }
        }
    }
}
