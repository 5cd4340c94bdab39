//! landkit Generator Library
//!
//! Section rendering engine for landkit.
//!
//! # Modules
//!
//! - [`registry`] - Section kinds, the renderer trait and the type registry
//! - [`dispatch`] - Descriptor to element, with unknown-type placeholders
//! - [`assemble`] - Page assembly with per-section failure isolation
//! - [`chrome`] - Site header and footer
//! - [`sections`] - Static section renderers
//! - [`providers`] - The interactive providers grid
//! - [`context`] - Render date, diagnostics flag and form transport
//! - [`data`] - Tolerant accessors over section payloads
//! - [`build`] - Build orchestration

pub mod assemble;
pub mod build;
pub mod chrome;
pub mod context;
pub mod data;
pub mod dispatch;
pub mod providers;
pub mod registry;
pub mod sections;

pub use assemble::{EngineError, MountOptions, MountOutcome, MountReport, PageAssembler, SectionFailure};
pub use build::{BuildError, BuildStats, Builder, RenderedPage};
pub use context::{ContactSubmission, FormTransport, NoTransport, RenderContext, TransportError};
pub use data::Data;
pub use dispatch::Dispatcher;
pub use providers::{GridEvent, GridModel, GridState, Provider, ProvidersWidget, SortMode};
pub use registry::{Registry, RenderError, SectionKind, SectionRenderer};
