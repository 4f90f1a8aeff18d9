use async_graphql::*;

use crate::{
    graphql::schema::{MutationRoot, QueryRoot},
    state::AppState,
};

pub mod errors;
pub mod guard;
pub mod scalar;
pub mod schema;

mod resolver_tests;

pub use guard::AuthGuard;
pub use scalar::Date;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
