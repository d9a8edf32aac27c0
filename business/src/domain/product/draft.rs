use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{PriceConfiguration, ProductAttributes};
use crate::domain::shared::value_objects::TenantId;

/// Product fields exactly as received from a client form, all text.
#[derive(Debug, Clone, Default)]
pub struct RawProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_configuration: Option<String>,
    pub attributes: Option<String>,
    pub tenant_id: Option<String>,
    pub category_id: Option<String>,
    pub is_publish: Option<String>,
}

/// Validated product fields, ready to be stored.
///
/// Built only through [`ProductDraft::parse`], which reports the first
/// offending field in form order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price_configuration: PriceConfiguration,
    pub attributes: ProductAttributes,
    pub tenant_id: TenantId,
    pub category_id: Uuid,
    pub is_publish: bool,
}

impl ProductDraft {
    pub fn parse(raw: RawProductInput) -> Result<Self, ProductError> {
        let name = required(raw.name).ok_or(ProductError::NameRequired)?;
        let description = required(raw.description).ok_or(ProductError::DescriptionRequired)?;

        let price_configuration = required(raw.price_configuration)
            .ok_or(ProductError::PriceConfigurationRequired)
            .and_then(|text| PriceConfiguration::parse(&text))?;

        let attributes = required(raw.attributes)
            .ok_or(ProductError::AttributesRequired)
            .and_then(|text| ProductAttributes::parse(&text))?;

        let tenant_id = required(raw.tenant_id)
            .map(TenantId::new)
            .ok_or(ProductError::TenantRequired)?;

        let category_id = required(raw.category_id)
            .ok_or(ProductError::CategoryRequired)
            .and_then(|text| {
                Uuid::parse_str(&text).map_err(|_| ProductError::InvalidCategoryId)
            })?;

        let is_publish = match required(raw.is_publish).as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(_) => return Err(ProductError::InvalidPublishFlag),
        };

        Ok(Self {
            name,
            description,
            price_configuration,
            attributes,
            tenant_id,
            category_id,
            is_publish,
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawProductInput {
        RawProductInput {
            name: Some("Margherita".to_string()),
            description: Some("Tomato, mozzarella, basil".to_string()),
            price_configuration: Some(
                r#"{"size": {"priceType": "base", "availableOptions": {"small": 400}}}"#
                    .to_string(),
            ),
            attributes: Some(r#"[{"name": "isHit", "value": "yes"}]"#.to_string()),
            tenant_id: Some("5".to_string()),
            category_id: Some("6f1c1d2e-8a4b-4c3d-9e8f-1a2b3c4d5e6f".to_string()),
            is_publish: None,
        }
    }

    #[test]
    fn should_parse_valid_input() {
        let draft = ProductDraft::parse(valid_input()).unwrap();

        assert_eq!(draft.name, "Margherita");
        assert_eq!(draft.tenant_id, TenantId::new("5"));
        assert!(!draft.is_publish);
        assert_eq!(draft.price_configuration.rules().len(), 1);
    }

    #[test]
    fn should_report_first_missing_field() {
        let input = RawProductInput {
            name: None,
            description: None,
            ..valid_input()
        };

        let result = ProductDraft::parse(input);

        assert!(matches!(result, Err(ProductError::NameRequired)));
    }

    #[test]
    fn should_treat_blank_text_as_missing() {
        let input = RawProductInput {
            description: Some("   ".to_string()),
            ..valid_input()
        };

        let result = ProductDraft::parse(input);

        assert!(matches!(result, Err(ProductError::DescriptionRequired)));
    }

    #[test]
    fn should_fail_on_malformed_price_configuration() {
        let input = RawProductInput {
            price_configuration: Some("{\"size\":".to_string()),
            ..valid_input()
        };

        let result = ProductDraft::parse(input);

        assert!(matches!(result, Err(ProductError::InvalidPriceConfiguration)));
    }

    #[test]
    fn should_fail_on_malformed_attributes() {
        let input = RawProductInput {
            attributes: Some("not json".to_string()),
            ..valid_input()
        };

        let result = ProductDraft::parse(input);

        assert!(matches!(result, Err(ProductError::InvalidAttributes)));
    }

    #[test]
    fn should_reject_category_that_is_not_an_identifier() {
        let input = RawProductInput {
            category_id: Some("pizza".to_string()),
            ..valid_input()
        };

        let result = ProductDraft::parse(input);

        assert!(matches!(result, Err(ProductError::InvalidCategoryId)));
    }

    #[test]
    fn should_parse_publish_flag() {
        let published = ProductDraft::parse(RawProductInput {
            is_publish: Some("true".to_string()),
            ..valid_input()
        })
        .unwrap();
        let hidden = ProductDraft::parse(RawProductInput {
            is_publish: Some("false".to_string()),
            ..valid_input()
        })
        .unwrap();

        assert!(published.is_publish);
        assert!(!hidden.is_publish);
    }

    #[test]
    fn should_reject_unknown_publish_flag() {
        let result = ProductDraft::parse(RawProductInput {
            is_publish: Some("yes".to_string()),
            ..valid_input()
        });

        assert!(matches!(result, Err(ProductError::InvalidPublishFlag)));
    }
}
