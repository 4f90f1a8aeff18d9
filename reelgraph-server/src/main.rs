use std::sync::Arc;

use eyre::{Result, eyre};
use http::Method;
use salvo::cors::Cors;
use salvo::prelude::*;
use tracing::info;

use reelgraph_server::config::{ServerConfig, StorageBackend};
use reelgraph_server::graphql::create_schema;
use reelgraph_server::repositories::actor::in_memory::InMemoryActorRepository;
use reelgraph_server::repositories::movie::in_memory::InMemoryMovieRepository;
use reelgraph_server::repositories::{
    ActorRepository, MovieRepository, SqlActorRepository, SqlMovieRepository,
};
use reelgraph_server::seed;
use reelgraph_server::state::{AppServices, AppState};

mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    reelgraph_server::logging::init_tracing();

    info!("Starting reelgraph-server...");

    let config = ServerConfig::load_and_validate().map_err(|e| eyre!(e))?;

    let (movie_repo, actor_repo): (Arc<dyn MovieRepository>, Arc<dyn ActorRepository>) =
        match config.storage_backend()? {
            StorageBackend::Memory => {
                let movie_repo = Arc::new(InMemoryMovieRepository::default());
                let actor_repo = Arc::new(InMemoryActorRepository::default());
                let seeded = seed::seed_catalog(movie_repo.as_ref(), actor_repo.as_ref())
                    .await
                    .map_err(|e| eyre!("Failed to seed catalog: {}", e))?;
                info!("Seeded in-memory catalog with {} movies", seeded);
                (movie_repo, actor_repo)
            }
            StorageBackend::Database => {
                info!("Connecting to database at {}", config.database_url);
                let db = sea_orm::Database::connect(&config.database_url)
                    .await
                    .map_err(|e| eyre!("Failed to connect to database: {}", e))?;
                info!("Connected to database");
                (
                    Arc::new(SqlMovieRepository::new(db.clone())),
                    Arc::new(SqlActorRepository::new(db)),
                )
            }
        };

    let services = AppServices::new(&config, movie_repo, actor_repo);
    let state = AppState::new(config.clone(), services);
    let schema = create_schema(state.clone());

    let cors = Cors::new()
        .allow_origin(salvo::cors::AllowOrigin::mirror_request())
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec!["authorization", "content-type", "accept"])
        .allow_credentials(true)
        .max_age(3600)
        .into_handler();

    let router = routes::create_router(state, schema);
    let service = Service::new(router).hoop(cors);

    let bind_address = config.bind_address();
    info!("Binding to address: {}", bind_address);
    let acceptor = TcpListener::new(bind_address.clone()).bind().await;

    info!("GraphQL endpoint at http://{}/v1/graphql", bind_address);

    Server::new(acceptor).serve(service).await;

    Ok(())
}
