//! Product descriptors
//!
//! The classification result attached to each transaction: which clinical
//! service was sold, its coarse category and its kind.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::money::Money;

/// Coarse clinical-service grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    AdhdAdult,
    AdhdChild,
    AsdAdult,
    AsdChild,
    /// Autism products sold to both adults and children
    Asd,
    Treatment,
    Other,
    Unknown,
    Test,
}

impl ProductCategory {
    /// Tag used in reports and exports ("adhd_adult")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdhdAdult => "adhd_adult",
            Self::AdhdChild => "adhd_child",
            Self::AsdAdult => "asd_adult",
            Self::AsdChild => "asd_child",
            Self::Asd => "asd",
            Self::Treatment => "treatment",
            Self::Other => "other",
            Self::Unknown => "unknown",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of product sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Assessment,
    Reassessment,
    Package,
    Subscription,
    Addon,
    Test,
    Unknown,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::Reassessment => "reassessment",
            Self::Package => "package",
            Self::Subscription => "subscription",
            Self::Addon => "addon",
            Self::Test => "test",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a transaction was identified as
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub name: Cow<'static, str>,
    pub category: ProductCategory,
    #[serde(rename = "type")]
    pub kind: ProductType,
}

impl ProductDescriptor {
    /// A catalog product with a static name
    pub const fn new(name: &'static str, category: ProductCategory, kind: ProductType) -> Self {
        Self {
            name: Cow::Borrowed(name),
            category,
            kind,
        }
    }

    /// Descriptor for processor test charges
    pub const fn test() -> Self {
        Self::new("Test Transaction", ProductCategory::Test, ProductType::Test)
    }

    /// Catch-all descriptor naming the unmatched amount ("Unknown (£123.45)")
    pub fn unknown(amount: Money) -> Self {
        Self {
            name: Cow::Owned(format!("Unknown ({})", amount)),
            category: ProductCategory::Unknown,
            kind: ProductType::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category == ProductCategory::Unknown
    }
}

impl fmt::Display for ProductDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.name, self.category, self.kind)
    }
}
