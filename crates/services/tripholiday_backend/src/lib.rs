//! Wiring for the Trip Holiday server: application state, the service
//! factory and the router the binaries serve.

pub mod app;
pub mod app_state;
pub mod seed;
pub mod service_factory;

pub use app::build_router;
pub use app_state::{AppState, AppStateBuilder};
pub use service_factory::TripServiceFactory;
