//! Fixture catalog for the in-memory storage backend.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::models::domain::{CreateActor, CreateMovie, WatchStatus};
use crate::repositories::{ActorRepository, MovieRepository};

fn fixture_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid fixture date")
        .and_utc()
}

/// Seed the starter catalog. Returns the number of movies seeded.
pub async fn seed_catalog(
    movie_repo: &dyn MovieRepository,
    actor_repo: &dyn ActorRepository,
) -> Result<usize, DbErr> {
    let chiang = actor_repo
        .create(CreateActor {
            name: "Chiang Sheng".to_string(),
        })
        .await?;
    let lu = actor_repo
        .create(CreateActor {
            name: "Lu Feng".to_string(),
        })
        .await?;
    let gordon = actor_repo
        .create(CreateActor {
            name: "Gordon Liu".to_string(),
        })
        .await?;

    let movies = vec![
        CreateMovie {
            title: "5 Deadly Venoms".to_string(),
            release_date: Some(fixture_date(1978, 8, 12)),
            rating: Some(5),
            status: Some(WatchStatus::Watched),
            actor_ids: vec![chiang.id, lu.id],
        },
        CreateMovie {
            title: "The 36th Chamber of Shaolin".to_string(),
            release_date: Some(fixture_date(1978, 2, 2)),
            rating: Some(5),
            status: Some(WatchStatus::Interested),
            actor_ids: vec![gordon.id],
        },
    ];

    let count = movies.len();
    for movie in movies {
        movie_repo.create(movie).await?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::actor::in_memory::InMemoryActorRepository;
    use crate::repositories::movie::in_memory::InMemoryMovieRepository;

    #[tokio::test]
    async fn test_seed_populates_catalog_in_order() {
        let movie_repo = InMemoryMovieRepository::default();
        let actor_repo = InMemoryActorRepository::default();

        let seeded = seed_catalog(&movie_repo, &actor_repo).await.unwrap();
        assert_eq!(seeded, 2);

        let movies = movie_repo.find_all().await.unwrap();
        assert_eq!(movies[0].title, "5 Deadly Venoms");
        assert_eq!(movies[1].title, "The 36th Chamber of Shaolin");

        // Every seeded reference resolves against the actor set.
        for movie in &movies {
            let actors = actor_repo.find_by_ids(&movie.actor_ids).await.unwrap();
            assert_eq!(actors.len(), movie.actor_ids.len());
        }
    }
}
