use crate::domain::broker::BrokerError;
use crate::domain::errors::RepositoryError;
use crate::domain::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_required")]
    NameRequired,
    #[error("product.description_required")]
    DescriptionRequired,
    #[error("product.price_configuration_required")]
    PriceConfigurationRequired,
    #[error("product.invalid_price_configuration")]
    InvalidPriceConfiguration,
    #[error("product.attributes_required")]
    AttributesRequired,
    #[error("product.invalid_attributes")]
    InvalidAttributes,
    #[error("product.tenant_required")]
    TenantRequired,
    #[error("product.category_required")]
    CategoryRequired,
    #[error("product.invalid_category_id")]
    InvalidCategoryId,
    #[error("product.invalid_publish_flag")]
    InvalidPublishFlag,
    #[error("product.image_required")]
    ImageRequired,
    #[error("product.image_unreadable")]
    ImageUnreadable,
    #[error("product.not_found")]
    NotFound,
    #[error("product.forbidden")]
    Forbidden,
    #[error("storage.failure")]
    Storage(#[from] StorageError),
    #[error("product.event_publish_failed")]
    EventPublish(#[source] BrokerError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Whether the error stems from malformed client input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameRequired
                | ProductError::DescriptionRequired
                | ProductError::PriceConfigurationRequired
                | ProductError::InvalidPriceConfiguration
                | ProductError::AttributesRequired
                | ProductError::InvalidAttributes
                | ProductError::TenantRequired
                | ProductError::CategoryRequired
                | ProductError::InvalidCategoryId
                | ProductError::InvalidPublishFlag
                | ProductError::ImageRequired
                | ProductError::ImageUnreadable
        )
    }
}
