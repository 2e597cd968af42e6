#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod projection;
pub mod schema;
pub mod utils;

pub use cli::app::{Cli, Command};
pub use projection::{
    Field, FieldSelection, PhysicalSchema, ProjectionError, ProjectionRequest, Projector,
    RenderedStatement,
};
