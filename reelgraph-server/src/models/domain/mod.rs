mod actor;
mod movie;

pub use actor::{Actor, CreateActor};
pub use movie::{CreateMovie, Movie, WatchStatus};
