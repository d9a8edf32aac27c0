use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    Base,
    Additional,
    /// Spelling used by older clients, echoed back as received.
    #[serde(rename = "aditional")]
    AdditionalLegacy,
}

impl PriceType {
    pub fn is_additional(&self) -> bool {
        matches!(self, PriceType::Additional | PriceType::AdditionalLegacy)
    }
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceType::Base => write!(f, "base"),
            PriceType::Additional => write!(f, "additional"),
            PriceType::AdditionalLegacy => write!(f, "aditional"),
        }
    }
}

/// Pricing rule of one configurable dimension, e.g. every available size
/// with its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRule {
    pub price_type: PriceType,
    pub available_options: BTreeMap<String, serde_json::Number>,
}

/// Price rules keyed by dimension name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceConfiguration(BTreeMap<String, PriceRule>);

impl PriceConfiguration {
    pub fn new(rules: BTreeMap<String, PriceRule>) -> Result<Self, ProductError> {
        let has_invalid_price = rules
            .values()
            .flat_map(|rule| rule.available_options.values())
            .any(|price| price.as_f64().is_none_or(|p| !p.is_finite() || p < 0.0));
        if has_invalid_price {
            return Err(ProductError::InvalidPriceConfiguration);
        }

        Ok(Self(rules))
    }

    /// Parses the serialized form sent by clients.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let rules: BTreeMap<String, PriceRule> =
            serde_json::from_str(raw).map_err(|_| ProductError::InvalidPriceConfiguration)?;
        Self::new(rules)
    }

    pub fn rules(&self) -> &BTreeMap<String, PriceRule> {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    pub value: serde_json::Value,
}

/// Named selectable options of a product, in client order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductAttributes(Vec<ProductAttribute>);

impl ProductAttributes {
    pub fn new(attributes: Vec<ProductAttribute>) -> Result<Self, ProductError> {
        if attributes.iter().any(|a| a.name.trim().is_empty()) {
            return Err(ProductError::InvalidAttributes);
        }

        Ok(Self(attributes))
    }

    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let attributes: Vec<ProductAttribute> =
            serde_json::from_str(raw).map_err(|_| ProductError::InvalidAttributes)?;
        Self::new(attributes)
    }

    pub fn items(&self) -> &[ProductAttribute] {
        &self.0
    }
}
