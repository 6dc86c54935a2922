#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("unknown body region: {0}")]
    UnknownRegion(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] symcheck_catalog::CatalogError),
}

pub type CheckerResult<T> = std::result::Result<T, CheckerError>;
