//! Product identification
//!
//! Maps one transaction (amount plus optional description) onto a product
//! descriptor. Decision order, first match wins:
//!
//! 1. amount at or below the test threshold: test transaction
//! 2. description keyword rules (`rules::TEXT_RULES`, in order)
//! 3. exact price lookup in the `PriceCatalog`
//! 4. unknown product naming the amount
//!
//! Classification is total: every input gets a descriptor.

pub mod catalog;
pub mod rules;

use tracing::{debug, warn};

use crate::models::{Money, ProductDescriptor};

pub use catalog::{PriceCatalog, STANDARD_PRICES};
pub use rules::{RuleOutcome, TextRule, TEXT_RULES};

/// Charges at or below this amount are processor test charges
pub const DEFAULT_TEST_THRESHOLD: Money = Money::from_units(1);

/// How a product was identified, with the resulting descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Trivial amount, treated as a test charge
    Test(ProductDescriptor),
    /// A description rule matched
    Text {
        rule: &'static str,
        product: ProductDescriptor,
    },
    /// The rounded amount matched a catalog price
    Price(ProductDescriptor),
    /// Nothing matched
    Unknown(ProductDescriptor),
}

impl Classification {
    pub fn product(&self) -> &ProductDescriptor {
        match self {
            Self::Test(product)
            | Self::Text { product, .. }
            | Self::Price(product)
            | Self::Unknown(product) => product,
        }
    }

    pub fn into_product(self) -> ProductDescriptor {
        match self {
            Self::Test(product)
            | Self::Text { product, .. }
            | Self::Price(product)
            | Self::Unknown(product) => product,
        }
    }

    /// Short label for the decision path ("text:premium", "price", ...)
    pub fn source(&self) -> String {
        match self {
            Self::Test(_) => "test".to_string(),
            Self::Text { rule, .. } => format!("text:{}", rule),
            Self::Price(_) => "price".to_string(),
            Self::Unknown(_) => "unknown".to_string(),
        }
    }
}

/// Classifier over a price catalog
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: PriceCatalog,
    test_threshold: Money,
}

impl Classifier {
    pub fn new(catalog: PriceCatalog, test_threshold: Money) -> Self {
        Self {
            catalog,
            test_threshold,
        }
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn test_threshold(&self) -> Money {
        self.test_threshold
    }

    /// Classify a transaction, reporting which step decided
    pub fn classify(&self, amount: Money, description: Option<&str>) -> Classification {
        if amount <= self.test_threshold {
            return Classification::Test(ProductDescriptor::test());
        }

        if let Some((rule, product)) = description.and_then(rules::match_description) {
            debug!(rule = rule.id, product = %product.name, "matched description rule");
            return Classification::Text {
                rule: rule.id,
                product: product.clone(),
            };
        }

        if let Some(product) = self.catalog.lookup(amount) {
            debug!(%amount, product = %product.name, "matched catalog price");
            return Classification::Price(product.clone());
        }

        warn!(%amount, description = description.unwrap_or(""), "no product matched");
        Classification::Unknown(ProductDescriptor::unknown(amount))
    }

    /// Identify the product for a transaction
    pub fn identify(&self, amount: Money, description: Option<&str>) -> ProductDescriptor {
        self.classify(amount, description).into_product()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(PriceCatalog::standard(), DEFAULT_TEST_THRESHOLD)
    }
}

/// Identify a product with the standard catalog and test threshold
pub fn identify_product(amount: Money, description: Option<&str>) -> ProductDescriptor {
    Classifier::default().identify(amount, description)
}
