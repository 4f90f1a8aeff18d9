use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::models::domain::{CreateMovie, Movie};

/// Repository for movie persistence. `find_all` returns the catalog in
/// insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync + std::fmt::Debug {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, DbErr>;
    async fn find_all(&self) -> Result<Vec<Movie>, DbErr>;
    async fn create(&self, create: CreateMovie) -> Result<Movie, DbErr>;
}

/// SQL-based implementation of the MovieRepository trait.
#[derive(Debug, Clone)]
pub struct SqlMovieRepository {
    db: DatabaseConnection,
}

impl SqlMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SqlMovieRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, DbErr> {
        use reelgraph_entity::{movie, movie_actor};
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

        let Some(model) = movie::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let refs = movie_actor::Entity::find()
            .filter(movie_actor::Column::MovieId.eq(id))
            .order_by_asc(movie_actor::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(Movie::from_model(model, refs)))
    }

    async fn find_all(&self) -> Result<Vec<Movie>, DbErr> {
        use reelgraph_entity::{movie, movie_actor};
        use sea_orm::{EntityTrait, QueryOrder};

        let models = movie::Entity::find()
            .order_by_asc(movie::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let mut refs_by_movie: HashMap<Uuid, Vec<movie_actor::Model>> = HashMap::new();
        for row in movie_actor::Entity::find().all(&self.db).await? {
            refs_by_movie.entry(row.movie_id).or_default().push(row);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let refs = refs_by_movie.remove(&m.id).unwrap_or_default();
                Movie::from_model(m, refs)
            })
            .collect())
    }

    async fn create(&self, create: CreateMovie) -> Result<Movie, DbErr> {
        use chrono::Utc;
        use reelgraph_entity::{movie, movie_actor};
        use sea_orm::{ActiveModelTrait, Set};

        // Movie row and its join rows land atomically.
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let new_movie = movie::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(create.title),
            release_date: Set(create.release_date.map(Into::into)),
            rating: Set(create.rating),
            status: Set(create.status.map(Into::into)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let model = new_movie.insert(&txn).await?;

        let mut refs = Vec::with_capacity(create.actor_ids.len());
        for (position, actor_id) in create.actor_ids.into_iter().enumerate() {
            let row = movie_actor::ActiveModel {
                movie_id: Set(model.id),
                actor_id: Set(actor_id),
                position: Set(position as i32),
            };
            refs.push(row.insert(&txn).await?);
        }

        txn.commit().await?;
        Ok(Movie::from_model(model, refs))
    }
}

/// In-memory movie store. Backs `STORAGE=memory` and the resolver tests;
/// the Vec preserves insertion order.
pub mod in_memory {
    use super::*;
    use chrono::Utc;
    use parking_lot::RwLock;

    #[derive(Debug, Default)]
    pub struct InMemoryMovieRepository {
        pub movies: RwLock<Vec<Movie>>,
    }

    #[async_trait]
    impl MovieRepository for InMemoryMovieRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, DbErr> {
            Ok(self.movies.read().iter().find(|m| m.id == id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Movie>, DbErr> {
            Ok(self.movies.read().clone())
        }

        async fn create(&self, create: CreateMovie) -> Result<Movie, DbErr> {
            let now = Utc::now();
            let movie = Movie {
                id: Uuid::new_v4(),
                title: create.title,
                release_date: create.release_date,
                rating: create.rating,
                status: create.status,
                actor_ids: create.actor_ids,
                created_at: now,
                updated_at: now,
            };
            self.movies.write().push(movie.clone());
            Ok(movie)
        }
    }
}
