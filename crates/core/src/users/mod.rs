//! Users module - the user directory, password changes, and admin
//! maintenance.

mod users_errors;
mod users_model;
mod users_service;
mod users_traits;

pub use users_errors::UserError;
pub use users_model::{NewUser, Role, User};
pub use users_service::UserService;
pub use users_traits::{ConfirmationTrait, UserRepositoryTrait, UserServiceTrait};
