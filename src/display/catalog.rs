//! Catalog display formatting
//!
//! Lists the price catalog and the description rules that take precedence
//! over it.

use crate::classifier::{PriceCatalog, RuleOutcome, TEXT_RULES};
use crate::config::Settings;

/// Format the price catalog as a table, followed by the rule order
pub fn format_catalog(catalog: &PriceCatalog, settings: &Settings) -> String {
    if catalog.is_empty() {
        return "No catalog prices configured.".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!(
        "{:>10}  {:<40} {:<12} {}\n",
        "Price", "Product", "Category", "Type"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for (price, product) in catalog.iter() {
        output.push_str(&format!(
            "{:>10}  {:<40} {:<12} {}\n",
            settings.money(price),
            product.name,
            product.category.as_str(),
            product.kind.as_str()
        ));
    }

    output.push_str("\nDescription rules (checked first, in order):\n");
    for (i, rule) in TEXT_RULES.iter().enumerate() {
        let target = match &rule.outcome {
            RuleOutcome::Fixed(product) => product.name.to_string(),
            RuleOutcome::Refine {
                when_any,
                then,
                otherwise,
            } => format!(
                "{} if [{}], else {}",
                then.name,
                when_any.join(", "),
                otherwise.name
            ),
        };
        output.push_str(&format!(
            "  {}. {:<16} [{}] => {}\n",
            i + 1,
            rule.id,
            rule.keywords.join(", "),
            target
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_catalog() {
        let output = format_catalog(&PriceCatalog::standard(), &Settings::default());
        assert!(output.contains("£1,200.00  ADHD Complete Care Package"));
        assert!(output.contains("Consultation/Add-on"));
        assert!(output.contains("1. autism"));
        assert!(output.contains("CYP Autism Assessment if [cyp, child], else Adult Autism Assessment"));
        assert!(output.find("£250.00").unwrap() < output.find("£2,100.00").unwrap());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PriceCatalog::from_entries(Vec::new()).unwrap();
        assert_eq!(
            format_catalog(&catalog, &Settings::default()),
            "No catalog prices configured."
        );
    }
}
