use std::sync::Arc;

use sea_orm::DbErr;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::domain::{Actor, CreateMovie, Movie};
use crate::repositories::{ActorRepository, MovieRepository};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Storage unavailable: {0}")]
    Storage(#[from] DbErr),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[async_trait::async_trait]
pub trait CatalogService: Send + Sync + std::fmt::Debug {
    /// Full catalog in insertion order.
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Single movie by id, or None when no movie matches.
    async fn get_movie(&self, id: Uuid) -> Result<Option<Movie>, CatalogError>;

    /// Actors referenced by `ids`, filtered against the full actor set.
    /// Dangling ids are dropped, never an error.
    async fn get_actors(&self, ids: &[Uuid]) -> Result<Vec<Actor>, CatalogError>;

    /// Insert a movie and return the refreshed catalog.
    async fn add_movie(&self, create: CreateMovie) -> Result<Vec<Movie>, CatalogError>;
}

#[derive(Debug)]
pub struct LocalCatalogService {
    movie_repo: Arc<dyn MovieRepository>,
    actor_repo: Arc<dyn ActorRepository>,
}

impl LocalCatalogService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, actor_repo: Arc<dyn ActorRepository>) -> Self {
        Self {
            movie_repo,
            actor_repo,
        }
    }
}

#[async_trait::async_trait]
impl CatalogService for LocalCatalogService {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movie_repo.find_all().await?)
    }

    async fn get_movie(&self, id: Uuid) -> Result<Option<Movie>, CatalogError> {
        Ok(self.movie_repo.find_by_id(id).await?)
    }

    async fn get_actors(&self, ids: &[Uuid]) -> Result<Vec<Actor>, CatalogError> {
        Ok(self.actor_repo.find_by_ids(ids).await?)
    }

    async fn add_movie(&self, create: CreateMovie) -> Result<Vec<Movie>, CatalogError> {
        if create.title.trim().is_empty() {
            return Err(CatalogError::Validation("title must not be empty".into()));
        }

        let created = self.movie_repo.create(create).await?;
        debug!(movie_id = %created.id, "movie added to catalog");

        Ok(self.movie_repo.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::CreateActor;
    use crate::repositories::actor::in_memory::InMemoryActorRepository;
    use crate::repositories::movie::in_memory::InMemoryMovieRepository;

    fn service_with_repos() -> (
        LocalCatalogService,
        Arc<InMemoryMovieRepository>,
        Arc<InMemoryActorRepository>,
    ) {
        let movie_repo = Arc::new(InMemoryMovieRepository::default());
        let actor_repo = Arc::new(InMemoryActorRepository::default());
        let service = LocalCatalogService::new(movie_repo.clone(), actor_repo.clone());
        (service, movie_repo, actor_repo)
    }

    fn create_movie(title: &str, actor_ids: Vec<Uuid>) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            release_date: None,
            rating: Some(5),
            status: None,
            actor_ids,
        }
    }

    #[tokio::test]
    async fn test_add_movie_returns_refreshed_catalog_in_order() {
        let (service, _, _) = service_with_repos();

        let after_first = service
            .add_movie(create_movie("5 Deadly Venoms", vec![]))
            .await
            .unwrap();
        assert_eq!(after_first.len(), 1);

        let after_second = service
            .add_movie(create_movie("36th Chamber", vec![]))
            .await
            .unwrap();
        assert_eq!(after_second.len(), 2);
        assert_eq!(after_second[0].title, "5 Deadly Venoms");
        assert_eq!(after_second[1].title, "36th Chamber");
    }

    #[tokio::test]
    async fn test_add_movie_rejects_empty_title() {
        let (service, movie_repo, _) = service_with_repos();

        let err = service.add_movie(create_movie("   ", vec![])).await;
        assert!(matches!(err, Err(CatalogError::Validation(_))));
        assert!(movie_repo.movies.read().is_empty(), "no write on rejection");
    }

    #[tokio::test]
    async fn test_get_movie_unknown_id_is_none() {
        let (service, _, _) = service_with_repos();
        let found = service.get_movie(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_actors_filters_and_drops_dangling() {
        let (service, _, actor_repo) = service_with_repos();

        let a = actor_repo
            .create(CreateActor {
                name: "Gordon Liu".to_string(),
            })
            .await
            .unwrap();
        let _unreferenced = actor_repo
            .create(CreateActor {
                name: "Lu Feng".to_string(),
            })
            .await
            .unwrap();

        let dangling = Uuid::new_v4();
        let actors = service.get_actors(&[a.id, dangling]).await.unwrap();

        assert_eq!(actors.len(), 1);
        assert_eq!(actors[0].name, "Gordon Liu");
    }
}
