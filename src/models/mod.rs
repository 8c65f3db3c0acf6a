//! Data models for the site content.
//!
//! These models match the frontend TypeScript interfaces so JSON keeps the same field names.

mod datastore;
mod event;
mod gallery;
mod news;
mod program;
mod team;

pub use datastore::*;
pub use event::*;
pub use gallery::*;
pub use news::*;
pub use program::*;
pub use team::*;
