use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A movie in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_date: Option<DateTime<Utc>>,
    pub rating: Option<i32>,
    pub status: Option<WatchStatus>,
    /// Ordered weak references into the actor set. Entries may dangle;
    /// resolution drops misses.
    pub actor_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Watch status of a catalog movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchStatus {
    Watched,
    Interested,
    NotInterested,
    Unknown,
}

/// Parameters for creating a movie
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: Option<DateTime<Utc>>,
    pub rating: Option<i32>,
    pub status: Option<WatchStatus>,
    pub actor_ids: Vec<Uuid>,
}

impl Movie {
    /// Rebuild a domain movie from its row and its join rows.
    pub fn from_model(
        model: reelgraph_entity::movie::Model,
        mut refs: Vec<reelgraph_entity::movie_actor::Model>,
    ) -> Self {
        refs.sort_by_key(|r| r.position);
        Self {
            id: model.id,
            title: model.title,
            release_date: model.release_date.map(|d| d.with_timezone(&Utc)),
            rating: model.rating,
            status: model.status.map(WatchStatus::from),
            actor_ids: refs.into_iter().map(|r| r.actor_id).collect(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<reelgraph_entity::movie::WatchStatus> for WatchStatus {
    fn from(status: reelgraph_entity::movie::WatchStatus) -> Self {
        match status {
            reelgraph_entity::movie::WatchStatus::Watched => WatchStatus::Watched,
            reelgraph_entity::movie::WatchStatus::Interested => WatchStatus::Interested,
            reelgraph_entity::movie::WatchStatus::NotInterested => WatchStatus::NotInterested,
            reelgraph_entity::movie::WatchStatus::Unknown => WatchStatus::Unknown,
        }
    }
}

impl From<WatchStatus> for reelgraph_entity::movie::WatchStatus {
    fn from(status: WatchStatus) -> Self {
        match status {
            WatchStatus::Watched => reelgraph_entity::movie::WatchStatus::Watched,
            WatchStatus::Interested => reelgraph_entity::movie::WatchStatus::Interested,
            WatchStatus::NotInterested => reelgraph_entity::movie::WatchStatus::NotInterested,
            WatchStatus::Unknown => reelgraph_entity::movie::WatchStatus::Unknown,
        }
    }
}
