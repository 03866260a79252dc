//! Request handlers.
//!
//! Handlers delegate persistence to the repositories in `vidbits_db`, render
//! pages via [`crate::pages`] and map errors via [`crate::error::AppError`].

pub mod video;
