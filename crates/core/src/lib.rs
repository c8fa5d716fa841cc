//! Core domain types and errors for the `idnconv` workspace.
//!
//! This crate establishes the building blocks shared by the FFI bridge and
//! the command-line front end:
//!
//! - **`errors`**: the primary `Error` enum and `Result` type alias,
//!   centralizing every failure mode a conversion can surface.
//! - **`flags`**: the validated [`Flags`] option set accepted by the libidn2
//!   conversion entry points.
//!
//! Nothing in this crate touches the FFI boundary; it only defines the
//! vocabulary the rest of the workspace speaks.

pub mod errors;
pub mod flags;

pub use self::{
    errors::{Error, Result},
    flags::Flags,
};
