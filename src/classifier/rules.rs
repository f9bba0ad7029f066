//! Description rules
//!
//! An ordered list of keyword rules evaluated against the lower-cased
//! transaction description. The first rule with a matching keyword wins, so
//! the order of `TEXT_RULES` is part of the behavior.

use crate::models::{ProductCategory, ProductDescriptor, ProductType};

use ProductCategory::{AdhdAdult, AdhdChild, AsdAdult, AsdChild};
use ProductType::{Assessment, Package, Reassessment};

/// What a rule yields once one of its keywords matched
#[derive(Debug, Clone)]
pub enum RuleOutcome {
    /// Always this product
    Fixed(ProductDescriptor),
    /// `then` if the description also contains any of `when_any`, else `otherwise`
    Refine {
        when_any: &'static [&'static str],
        then: ProductDescriptor,
        otherwise: ProductDescriptor,
    },
}

/// A keyword rule
#[derive(Debug, Clone)]
pub struct TextRule {
    /// Rule ID for tracking
    pub id: &'static str,
    /// The rule fires if any keyword occurs in the description
    pub keywords: &'static [&'static str],
    pub outcome: RuleOutcome,
}

impl TextRule {
    /// Check whether any keyword occurs in an already lower-cased description
    pub fn matches(&self, text_lower: &str) -> bool {
        contains_any(text_lower, self.keywords)
    }

    /// Resolve the outcome for a description this rule matched
    pub fn resolve(&self, text_lower: &str) -> &ProductDescriptor {
        match &self.outcome {
            RuleOutcome::Fixed(product) => product,
            RuleOutcome::Refine {
                when_any,
                then,
                otherwise,
            } => {
                if contains_any(text_lower, when_any) {
                    then
                } else {
                    otherwise
                }
            }
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Description rules in priority order
pub const TEXT_RULES: &[TextRule] = &[
    TextRule {
        id: "autism",
        keywords: &["autism", "asd", "ados"],
        outcome: RuleOutcome::Refine {
            when_any: &["cyp", "child"],
            then: ProductDescriptor::new("CYP Autism Assessment", AsdChild, Assessment),
            otherwise: ProductDescriptor::new("Adult Autism Assessment", AsdAdult, Assessment),
        },
    },
    TextRule {
        id: "child",
        keywords: &["children", "child", "u18", "cyp"],
        outcome: RuleOutcome::Refine {
            when_any: &["assessment only"],
            then: ProductDescriptor::new("Child ADHD Assessment Only", AdhdChild, Assessment),
            otherwise: ProductDescriptor::new("Child ADHD Package", AdhdChild, Package),
        },
    },
    TextRule {
        id: "reassessment",
        keywords: &["re-assessment", "reassessment"],
        outcome: RuleOutcome::Fixed(ProductDescriptor::new(
            "ADHD Re-assessment",
            AdhdAdult,
            Reassessment,
        )),
    },
    TextRule {
        id: "premium",
        keywords: &["premium"],
        outcome: RuleOutcome::Fixed(ProductDescriptor::new(
            "ADHD Premium Package",
            AdhdAdult,
            Package,
        )),
    },
    TextRule {
        id: "complete-care",
        keywords: &["complete care"],
        outcome: RuleOutcome::Fixed(ProductDescriptor::new(
            "ADHD Complete Care Package",
            AdhdAdult,
            Package,
        )),
    },
    TextRule {
        id: "assessment-only",
        keywords: &["assessment only"],
        outcome: RuleOutcome::Fixed(ProductDescriptor::new(
            "ADHD Assessment Only",
            AdhdAdult,
            Assessment,
        )),
    },
];

/// First rule matching the description, with the product it resolves to
pub fn match_description(description: &str) -> Option<(&'static TextRule, &'static ProductDescriptor)> {
    let text_lower = description.to_lowercase();
    TEXT_RULES
        .iter()
        .find(|rule| rule.matches(&text_lower))
        .map(|rule| (rule, rule.resolve(&text_lower)))
}
