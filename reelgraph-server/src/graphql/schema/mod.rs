use async_graphql::*;

use catalog::{CatalogMutation, CatalogQuery};

pub mod catalog;

#[derive(MergedObject, Default)]
pub struct QueryRoot(pub CatalogQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(pub CatalogMutation);
