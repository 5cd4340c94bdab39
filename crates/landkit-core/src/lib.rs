//! landkit Core Library
//!
//! Content schema, configuration, and error handling for the landkit page renderer.

pub mod config;
pub mod error;
pub mod schema;

pub use config::Config;
pub use error::{CoreError, Result};
pub use schema::{
    Brand, FooterConfig, HeaderConfig, LinkButton, NavLink, Page, SectionDescriptor, Seo, Site,
};
