#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_required")]
    NameRequired,
    #[error("category.not_found")]
    NotFound,
    #[error("category.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
