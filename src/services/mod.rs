//! Business logic services

pub mod catalog;
pub mod loans;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub loans: loans::LoansService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            repository,
        }
    }

    /// Database pool, used by the readiness probe
    pub fn repository_pool(&self) -> Pool<Postgres> {
        self.repository.pool.clone()
    }
}
