// --- File: crates/services/tripholiday_backend/src/app_state.rs ---
use std::sync::Arc;
use tripholiday_auth::{AuthState, JwtKeys};
use tripholiday_bookings::BookingsState;
use tripholiday_catalog::CatalogState;
use tripholiday_common::services::ServiceFactory;
use tripholiday_common::{config_error, TripError};
use tripholiday_config::AppConfig;
use tripholiday_db::Repositories;
use tripholiday_users::UsersState;

use crate::service_factory::TripServiceFactory;

/// Application state that is shared across all routes.
///
/// Each feature crate gets its own slice of it through the `*_state`
/// accessors, so routers only see the repositories they use.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repositories: Repositories,
    pub service_factory: Arc<dyn ServiceFactory>,
    pub auth: Arc<AuthState>,
}

/// Builder for [`AppState`], mainly so tests can swap in mock services.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    repositories: Option<Repositories>,
    service_factory: Option<Arc<dyn ServiceFactory>>,
    keys: Option<Arc<JwtKeys>>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            repositories: None,
            service_factory: None,
            keys: None,
        }
    }

    pub fn with_repositories(mut self, repositories: Repositories) -> Self {
        self.repositories = Some(repositories);
        self
    }

    pub fn with_service_factory(mut self, service_factory: Arc<dyn ServiceFactory>) -> Self {
        self.service_factory = Some(service_factory);
        self
    }

    pub fn with_jwt_keys(mut self, keys: Arc<JwtKeys>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Repositories are required. Missing keys are read from the `jwt`
    /// section and a missing factory is built from the config.
    pub fn build(self) -> Result<AppState, TripError> {
        let repositories = self
            .repositories
            .ok_or_else(|| config_error("AppState needs repositories"))?;

        let keys = match self.keys {
            Some(keys) => keys,
            None => {
                let jwt = self
                    .config
                    .jwt
                    .as_ref()
                    .ok_or_else(|| config_error("jwt section is missing from the configuration"))?;
                Arc::new(JwtKeys::from_config(jwt)?)
            }
        };

        let service_factory = match self.service_factory {
            Some(factory) => factory,
            None => Arc::new(TripServiceFactory::new(&self.config)),
        };

        let auth = Arc::new(AuthState {
            keys,
            admins: repositories.admins.clone(),
            users: repositories.users.clone(),
        });

        Ok(AppState {
            config: self.config,
            repositories,
            service_factory,
            auth,
        })
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// State for the running server: JWT keys and services from `config`.
    pub fn new(config: Arc<AppConfig>, repositories: Repositories) -> Result<Self, TripError> {
        Self::builder(config).with_repositories(repositories).build()
    }

    pub fn catalog_state(&self) -> Arc<CatalogState> {
        Arc::new(CatalogState {
            packages: self.repositories.packages.clone(),
        })
    }

    pub fn users_state(&self) -> Arc<UsersState> {
        Arc::new(UsersState {
            users: self.repositories.users.clone(),
            packages: self.repositories.packages.clone(),
        })
    }

    pub fn bookings_state(&self) -> Arc<BookingsState> {
        Arc::new(BookingsState {
            bookings: self.repositories.bookings.clone(),
            services: self.service_factory.clone(),
        })
    }
}
