//! Users domain: the protected handlers that sit behind AuthGate

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::User;
pub use repository::UserRepository;

pub use api::routes;
pub use api::UsersState;
