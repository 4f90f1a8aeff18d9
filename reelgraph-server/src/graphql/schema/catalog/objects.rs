use async_graphql::*;
use uuid::Uuid;

use crate::graphql::errors::catalog_error;
use crate::graphql::scalar::Date;
use crate::models::domain;
use crate::state::AppState;

/// Watch status of a catalog movie.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Watched,
    Interested,
    NotInterested,
    Unknown,
}

impl From<domain::WatchStatus> for Status {
    fn from(status: domain::WatchStatus) -> Self {
        match status {
            domain::WatchStatus::Watched => Status::Watched,
            domain::WatchStatus::Interested => Status::Interested,
            domain::WatchStatus::NotInterested => Status::NotInterested,
            domain::WatchStatus::Unknown => Status::Unknown,
        }
    }
}

impl From<Status> for domain::WatchStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Watched => domain::WatchStatus::Watched,
            Status::Interested => domain::WatchStatus::Interested,
            Status::NotInterested => domain::WatchStatus::NotInterested,
            Status::Unknown => domain::WatchStatus::Unknown,
        }
    }
}

/// A movie in the catalog.
pub struct Movie {
    movie: domain::Movie,
}

impl From<domain::Movie> for Movie {
    fn from(movie: domain::Movie) -> Self {
        Self { movie }
    }
}

#[Object]
impl Movie {
    async fn id(&self) -> ID {
        ID(self.movie.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.movie.title
    }

    async fn release_date(&self) -> Option<Date> {
        self.movie.release_date.map(Date)
    }

    async fn rating(&self) -> Option<i32> {
        self.movie.rating
    }

    async fn status(&self) -> Option<Status> {
        self.movie.status.map(Status::from)
    }

    /// Actors referenced by this movie. References with no matching actor
    /// are omitted.
    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let state = ctx.data::<AppState>()?;
        let actors = state
            .services
            .catalog
            .get_actors(&self.movie.actor_ids)
            .await
            .map_err(catalog_error)?;
        Ok(actors.into_iter().map(Actor::from).collect())
    }
}

/// An actor referenced by catalog movies.
#[derive(SimpleObject)]
pub struct Actor {
    pub id: ID,
    pub name: String,
}

impl From<domain::Actor> for Actor {
    fn from(actor: domain::Actor) -> Self {
        Self {
            id: ID(actor.id.to_string()),
            name: actor.name,
        }
    }
}

/// Payload for `addMovie`. Actor references are weak ids into the actor
/// set and are not validated on insert.
#[derive(InputObject)]
pub struct MovieInput {
    pub title: String,
    pub release_date: Option<Date>,
    pub rating: Option<i32>,
    pub status: Option<Status>,
    #[graphql(default)]
    pub actor_ids: Vec<ID>,
}

impl MovieInput {
    pub fn into_create(self) -> domain::CreateMovie {
        domain::CreateMovie {
            title: self.title,
            release_date: self.release_date.map(|d| d.0),
            rating: self.rating,
            status: self.status.map(Into::into),
            actor_ids: self
                .actor_ids
                .iter()
                .filter_map(|id| Uuid::parse_str(id).ok())
                .collect(),
        }
    }
}
