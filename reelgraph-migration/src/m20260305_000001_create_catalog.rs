use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "CREATE TYPE watch_status AS ENUM ('watched', 'interested', 'not_interested', 'unknown')",
        )
        .await?;

        db.execute_unprepared(
            "CREATE TABLE movies (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                title TEXT NOT NULL,
                release_date TIMESTAMPTZ,
                rating INTEGER,
                status watch_status,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )",
        )
        .await?;

        db.execute_unprepared(
            "CREATE TABLE actors (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )",
        )
        .await?;

        // actor_id carries no foreign key: actor references are weak and may
        // dangle; resolution drops misses instead of failing.
        db.execute_unprepared(
            "CREATE TABLE movie_actors (
                movie_id UUID NOT NULL REFERENCES movies (id) ON DELETE CASCADE,
                actor_id UUID NOT NULL,
                position INTEGER NOT NULL,
                PRIMARY KEY (movie_id, actor_id)
            )",
        )
        .await?;

        db.execute_unprepared("CREATE INDEX idx_movies_created_at ON movies (created_at)")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TABLE IF EXISTS movie_actors").await?;
        db.execute_unprepared("DROP TABLE IF EXISTS actors").await?;
        db.execute_unprepared("DROP TABLE IF EXISTS movies").await?;
        db.execute_unprepared("DROP TYPE IF EXISTS watch_status").await?;

        Ok(())
    }
}
