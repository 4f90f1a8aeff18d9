pub mod config;
pub use reelgraph_entity as entities;
pub mod graphql;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod state;
