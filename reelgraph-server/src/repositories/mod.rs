pub mod actor;
pub mod movie;

pub use actor::{ActorRepository, SqlActorRepository};
pub use movie::{MovieRepository, SqlMovieRepository};
