use std::ops::Deref;
use std::sync::Arc;

use crate::{
    config::ServerConfig,
    repositories::{ActorRepository, MovieRepository},
    services::{
        auth::{Principal, StaticTokenVerifier, TokenVerifier},
        catalog::{CatalogService, LocalCatalogService},
    },
};

#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: ServerConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: ServerConfig, services: AppServices) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, services }),
        }
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug)]
pub struct AppServices {
    pub catalog: Arc<dyn CatalogService>,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl AppServices {
    pub fn new(
        config: &ServerConfig,
        movie_repo: Arc<dyn MovieRepository>,
        actor_repo: Arc<dyn ActorRepository>,
    ) -> Self {
        Self {
            catalog: Arc::new(LocalCatalogService::new(movie_repo, actor_repo)),
            token_verifier: Arc::new(StaticTokenVerifier::new(config.auth_token.clone())),
        }
    }
}

/// Per-request context carrying the principal resolved by the transport
/// layer, if any.
#[derive(Clone, Debug)]
pub struct AppContextInner {
    pub principal: Option<Principal>,
}

pub struct AppContext(Arc<AppContextInner>);

impl AppContext {
    pub fn new(principal: Option<Principal>) -> Self {
        Self(Arc::new(AppContextInner { principal }))
    }

    pub fn principal(&self) -> Option<Principal> {
        self.0.principal.clone()
    }
}
