pub mod mutations;
pub mod objects;
pub mod queries;

pub use mutations::CatalogMutation;
pub use queries::CatalogQuery;
