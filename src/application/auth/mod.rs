//! Authentication use cases
//!
//! Each use case turns raw command fields into domain value objects and
//! delegates to the `AuthService`.

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserResponse, RegisterUserUseCase};
