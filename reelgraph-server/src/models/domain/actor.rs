use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An actor referenced by catalog movies
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating an actor
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
}

impl From<reelgraph_entity::actor::Model> for Actor {
    fn from(model: reelgraph_entity::actor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
