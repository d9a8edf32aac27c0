use poem_openapi::Multipart;
use poem_openapi::types::multipart::Upload;

use business::domain::product::draft::RawProductInput;
use business::domain::product::errors::ProductError;
use business::domain::storage::ImageFile;

/// Multipart body shared by product create and update.
///
/// Every text field is optional here so that the domain parse step decides
/// which one is reported first.
#[derive(Debug, Multipart)]
#[oai(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    /// JSON object: configuration name to `{ priceType, availableOptions }`
    pub price_configuration: Option<String>,
    /// JSON array of `{ name, value }`
    pub attributes: Option<String>,
    pub tenant_id: Option<String>,
    pub category_id: Option<String>,
    /// `"true"` or `"false"`
    pub is_publish: Option<String>,
    pub image: Option<Upload>,
}

impl ProductForm {
    pub fn into_parts(self) -> (RawProductInput, Option<Upload>) {
        let raw = RawProductInput {
            name: self.name,
            description: self.description,
            price_configuration: self.price_configuration,
            attributes: self.attributes,
            tenant_id: self.tenant_id,
            category_id: self.category_id,
            is_publish: self.is_publish,
        };
        (raw, self.image)
    }
}

/// Reads an uploaded file into memory. An empty part counts as no image.
pub async fn read_image(upload: Option<Upload>) -> Result<Option<ImageFile>, ProductError> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    let content_type = upload.content_type().map(str::to_string);
    let data = upload.into_vec().await.map_err(|e| {
        tracing::warn!("Could not read uploaded image: {e}");
        ProductError::ImageUnreadable
    })?;

    if data.is_empty() {
        return Ok(None);
    }
    Ok(Some(ImageFile { data, content_type }))
}
