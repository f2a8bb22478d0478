pub mod contracts;
pub mod controller;
pub mod mapper;
pub mod model;
pub mod service;

pub use contracts::{CreateUserRequest, UserResponse};
pub use model::User;
pub use service::{InMemoryUserService, UserService};
