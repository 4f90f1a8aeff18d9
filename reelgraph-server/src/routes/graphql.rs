use async_graphql::http::GraphiQLSource;
use reelgraph_server::graphql::AppSchema;
use reelgraph_server::state::{AppContext, AppState};
use salvo::prelude::*;
use tracing::warn;

/// Execute a GraphQL request.
///
/// The bearer token, when present, is resolved to a principal before
/// execution; guarded fields then check for the principal. A rejected
/// token leaves the request anonymous, so guarded fields fail with a
/// reported Unauthorized error instead of silently succeeding.
#[handler]
pub async fn graphql_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let schema = depot.obtain::<AppSchema>().unwrap().clone();
    let state = depot.obtain::<AppState>().unwrap().clone();

    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").map(str::to_string));

    let principal = match token {
        Some(token) => match state.services.token_verifier.authorize(&token).await {
            Ok(principal) => Some(principal),
            Err(e) => {
                warn!("rejected authorization token: {}", e);
                None
            }
        },
        None => None,
    };

    let gql_request: async_graphql::Request = match req.parse_json().await {
        Ok(r) => r,
        Err(_) => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Text::Plain("Invalid GraphQL request body"));
            return;
        }
    };

    let response = schema
        .execute(gql_request.data(AppContext::new(principal)))
        .await;
    res.render(Json(response));
}

/// Serve the GraphiQL UI.
#[handler]
pub async fn graphiql(res: &mut Response) {
    res.render(Text::Html(
        GraphiQLSource::build().endpoint("/v1/graphql").finish(),
    ));
}
