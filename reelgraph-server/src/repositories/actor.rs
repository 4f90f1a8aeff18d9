use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::models::domain::{Actor, CreateActor};

/// Repository for the global actor set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync + std::fmt::Debug {
    /// Actors whose id appears in `ids`, filtered against the full
    /// collection. Order follows the collection, not `ids`; ids with no
    /// matching actor are dropped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Actor>, DbErr>;
    async fn create(&self, create: CreateActor) -> Result<Actor, DbErr>;
}

/// SQL-based implementation of the ActorRepository trait.
#[derive(Debug, Clone)]
pub struct SqlActorRepository {
    db: DatabaseConnection,
}

impl SqlActorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActorRepository for SqlActorRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Actor>, DbErr> {
        use reelgraph_entity::actor;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = actor::Entity::find()
            .filter(actor::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(actor::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Actor::from).collect())
    }

    async fn create(&self, create: CreateActor) -> Result<Actor, DbErr> {
        use chrono::Utc;
        use reelgraph_entity::actor;
        use sea_orm::{ActiveModelTrait, Set};

        let new_actor = actor::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(create.name),
            created_at: Set(Utc::now().into()),
        };

        let result = new_actor.insert(&self.db).await?;
        Ok(Actor::from(result))
    }
}

/// In-memory actor store backing `STORAGE=memory` and the resolver tests.
pub mod in_memory {
    use super::*;
    use chrono::Utc;
    use parking_lot::RwLock;

    #[derive(Debug, Default)]
    pub struct InMemoryActorRepository {
        pub actors: RwLock<Vec<Actor>>,
    }

    #[async_trait]
    impl ActorRepository for InMemoryActorRepository {
        async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Actor>, DbErr> {
            Ok(self
                .actors
                .read()
                .iter()
                .filter(|a| ids.contains(&a.id))
                .cloned()
                .collect())
        }

        async fn create(&self, create: CreateActor) -> Result<Actor, DbErr> {
            let actor = Actor {
                id: Uuid::new_v4(),
                name: create.name,
                created_at: Utc::now(),
            };
            self.actors.write().push(actor.clone());
            Ok(actor)
        }
    }
}
