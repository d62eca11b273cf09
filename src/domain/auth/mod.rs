pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{NewUser, User};
pub use errors::{AuthError, HashError, RepositoryError, ValidationError};
pub use ports::{PasswordHasher, UserRepository};
pub use services::{AuthService, AuthServiceConfig};
pub use value_objects::{Email, FailureReason, Password, PasswordHash, UserId};
