//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, API calls,
//! session mutation) and delegates shared rendering to `components`.

pub mod change_password;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
