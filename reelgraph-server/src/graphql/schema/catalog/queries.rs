use async_graphql::*;
use uuid::Uuid;

use crate::graphql::errors::catalog_error;
use crate::graphql::schema::catalog::objects::Movie;
use crate::state::AppState;

#[derive(Default)]
pub struct CatalogQuery;

#[Object]
impl CatalogQuery {
    /// Full movie catalog in insertion order.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        let movies = state
            .services
            .catalog
            .list_movies()
            .await
            .map_err(catalog_error)?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    /// Single movie by id. Unknown ids resolve to null.
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let state = ctx.data::<AppState>()?;

        // An id that is not a UUID cannot match any movie.
        let Ok(id) = Uuid::parse_str(&id) else {
            return Ok(None);
        };

        let movie = state
            .services
            .catalog
            .get_movie(id)
            .await
            .map_err(catalog_error)?;
        Ok(movie.map(Movie::from))
    }
}
