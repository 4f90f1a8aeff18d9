pub mod graphql;
pub mod health;

use salvo::prelude::*;

use reelgraph_server::graphql::AppSchema;
use reelgraph_server::state::AppState;

/// Create the main API router with all routes
pub fn create_router(state: AppState, schema: AppSchema) -> Router {
    // Only `graphql` mutations are credential-checked; the check happens in
    // the handler (token -> principal) and the schema guard, not here.
    Router::new().hoop(affix_state::inject(state)).push(
        Router::with_path("v1")
            .push(Router::with_path("health").get(health::health_check))
            .push(
                Router::with_path("graphql")
                    .hoop(affix_state::inject(schema))
                    .get(graphql::graphiql)
                    .post(graphql::graphql_handler),
            ),
    )
}
