//! Price catalog
//!
//! Exact whole-unit prices mapped to the product sold at that price. Used
//! only when no description rule matches. Historical prices stay listed
//! alongside current ones; a price can belong to one product only.

use std::collections::BTreeMap;

use crate::error::{ReportError, ReportResult};
use crate::models::{Money, ProductCategory, ProductDescriptor, ProductType};

use ProductCategory::*;
use ProductType::*;

/// The standard product price list, in whole currency units
pub const STANDARD_PRICES: &[(i64, ProductDescriptor)] = &[
    // ADHD adult
    (590, ProductDescriptor::new("ADHD Assessment Only", AdhdAdult, Assessment)),
    (1200, ProductDescriptor::new("ADHD Complete Care Package", AdhdAdult, Package)),
    (1990, ProductDescriptor::new("ADHD Premium Package", AdhdAdult, Package)),
    (295, ProductDescriptor::new("ADHD Re-assessment", AdhdAdult, Reassessment)),
    // ADHD child
    (890, ProductDescriptor::new("Child ADHD Assessment Only", AdhdChild, Assessment)),
    (900, ProductDescriptor::new("Child ADHD Assessment Only (old price)", AdhdChild, Assessment)),
    // Treatment plans
    (750, ProductDescriptor::new("Adult 6-Month Treatment Plan", Treatment, Subscription)),
    (1050, ProductDescriptor::new("Child 6-Month Treatment Plan", Treatment, Subscription)),
    (1500, ProductDescriptor::new("Adult 12-Month Treatment Plan", Treatment, Subscription)),
    (2100, ProductDescriptor::new("Child 12-Month Treatment Plan", Treatment, Subscription)),
    // Autism
    (1750, ProductDescriptor::new("Adult Autism Assessment", AsdAdult, Assessment)),
    (1900, ProductDescriptor::new("Adult/CYP Autism Assessment", Asd, Assessment)),
    (1940, ProductDescriptor::new("Autism Assessment (variant)", Asd, Assessment)),
    // Other
    (250, ProductDescriptor::new("Consultation/Add-on", Other, Addon)),
    (990, ProductDescriptor::new("Complete Care (old price)", AdhdAdult, Package)),
];

// A repeated price in the standard list fails the build.
const _: () = assert!(
    first_duplicate_price(STANDARD_PRICES).is_none(),
    "duplicate price in STANDARD_PRICES"
);

/// Index of the first entry whose price repeats an earlier entry's
pub const fn first_duplicate_price(entries: &[(i64, ProductDescriptor)]) -> Option<usize> {
    let mut i = 1;
    while i < entries.len() {
        let mut j = 0;
        while j < i {
            if entries[j].0 == entries[i].0 {
                return Some(i);
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// Immutable price → product lookup
#[derive(Debug, Clone)]
pub struct PriceCatalog {
    entries: BTreeMap<i64, ProductDescriptor>,
}

impl PriceCatalog {
    /// Build a catalog, rejecting any price listed twice
    pub fn from_entries<I>(entries: I) -> ReportResult<Self>
    where
        I: IntoIterator<Item = (i64, ProductDescriptor)>,
    {
        let mut map = BTreeMap::new();
        for (price, product) in entries {
            if let Some(existing) = map.insert(price, product) {
                return Err(ReportError::duplicate_price(format!(
                    "{} ({})",
                    Money::from_units(price),
                    existing.name
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// The standard catalog
    ///
    /// `STANDARD_PRICES` is checked for repeated prices at compile time, so
    /// this cannot hit the `from_entries` duplicate error.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_PRICES.iter().cloned().collect(),
        }
    }

    /// Exact lookup after rounding the amount to whole units
    pub fn lookup(&self, amount: Money) -> Option<&ProductDescriptor> {
        self.entries.get(&amount.round_to_units())
    }

    /// Entries in ascending price order
    pub fn iter(&self) -> impl Iterator<Item = (Money, &ProductDescriptor)> {
        self.entries
            .iter()
            .map(|(price, product)| (Money::from_units(*price), product))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
