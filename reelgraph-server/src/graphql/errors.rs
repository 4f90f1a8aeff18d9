use async_graphql::ErrorExtensions;
use tracing::error;

use crate::services::catalog::CatalogError;

/// Map a catalog error onto a GraphQL error carrying a machine-readable
/// `code` extension, so callers can tell failures from empty data.
pub fn catalog_error(err: CatalogError) -> async_graphql::Error {
    let code = match &err {
        CatalogError::Storage(_) => {
            error!(error = %err, "catalog storage failure");
            "STORAGE_UNAVAILABLE"
        }
        CatalogError::Validation(_) => "BAD_USER_INPUT",
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
