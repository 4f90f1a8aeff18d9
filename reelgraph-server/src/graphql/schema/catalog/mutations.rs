use async_graphql::*;

use crate::graphql::AuthGuard;
use crate::graphql::errors::catalog_error;
use crate::graphql::schema::catalog::objects::{Movie, MovieInput};
use crate::state::AppState;

#[derive(Default)]
pub struct CatalogMutation;

#[Object]
impl CatalogMutation {
    /// Add a movie to the catalog and return the refreshed catalog.
    #[graphql(guard = "AuthGuard")]
    async fn add_movie(&self, ctx: &Context<'_>, movie: MovieInput) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        let movies = state
            .services
            .catalog
            .add_movie(movie.into_create())
            .await
            .map_err(catalog_error)?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }
}
