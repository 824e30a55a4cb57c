//! Wire contracts shared between the legal chat frontend and its backend.

pub mod domain;
