use crate::{BillKind, BillPayment, PenFactoryError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bills to run through the billing driver.
///
/// ```toml
/// [[bills]]
/// kind = "mobile"
/// money_amount = 25
/// debt = 23
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BillingConfig {
    #[serde(default)]
    pub bills: Vec<BillEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillEntry {
    pub kind: BillKind,
    pub money_amount: u64,
    pub debt: u64,
}

impl BillEntry {
    pub fn new(kind: BillKind, money_amount: u64, debt: u64) -> Self {
        Self {
            kind,
            money_amount,
            debt,
        }
    }

    pub fn payment(&self) -> BillPayment {
        BillPayment::new(self.money_amount, self.debt)
    }
}

impl BillingConfig {
    pub fn new(bills: Vec<BillEntry>) -> Self {
        Self { bills }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, PenFactoryError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PenFactoryError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            PenFactoryError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading billing config");
        Self::from_toml_str(&source)
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self::new(vec![
            BillEntry::new(BillKind::Mobile, 25, 23),
            BillEntry::new(BillKind::Internet, 22, 23),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_config() {
        let config = BillingConfig::from_toml_str(
            r#"
            [[bills]]
            kind = "internet"
            money_amount = 10
            debt = 4

            [[bills]]
            kind = "mobile"
            money_amount = 0
            debt = 1
            "#,
        )
        .unwrap();

        assert_eq!(
            config.bills,
            vec![
                BillEntry::new(BillKind::Internet, 10, 4),
                BillEntry::new(BillKind::Mobile, 0, 1),
            ]
        );
    }

    #[test]
    fn test_empty_config_has_no_bills() {
        let config = BillingConfig::from_toml_str("").unwrap();
        assert!(config.bills.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_config_error() {
        let result = BillingConfig::from_toml_str(
            r#"
            [[bills]]
            kind = "fax"
            money_amount = 1
            debt = 1
            "#,
        );
        assert!(matches!(result, Err(PenFactoryError::ConfigError(_))));
    }

    #[test]
    fn test_negative_amount_is_config_error() {
        let result = BillingConfig::from_toml_str(
            r#"
            [[bills]]
            kind = "mobile"
            money_amount = -5
            debt = 1
            "#,
        );
        assert!(matches!(result, Err(PenFactoryError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = BillingConfig::load("/nonexistent/billing.toml");
        assert!(matches!(result, Err(PenFactoryError::ConfigError(_))));
    }

    #[test]
    fn test_serialized_default_parses_back() {
        let text = toml::to_string(&BillingConfig::default()).unwrap();
        assert_eq!(
            BillingConfig::from_toml_str(&text).unwrap(),
            BillingConfig::default()
        );
    }
}
