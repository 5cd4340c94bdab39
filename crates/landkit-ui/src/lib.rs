//! landkit UI primitives
//!
//! A small DOM-like element tree for building pages.
//!
//! # Modules
//!
//! - [`element`] - Shared element handles and the [`h`] builder
//! - [`event`] - Events and listeners
//! - [`document`] - Host document with page selector and SEO sinks
//! - [`html`] - HTML serialization
//!
//! # Example
//!
//! ```
//! use landkit_ui::{attrs, h, listener, Event};
//!
//! let button = h(
//!     "button",
//!     attrs! {
//!         "class" => "burger",
//!         "type" => "button",
//!         "onclick" => listener(|ev| ev.prevent_default()),
//!     },
//!     "☰",
//! );
//!
//! assert!(!button.dispatch_event(&Event::click()));
//! assert_eq!(button.to_html(), r#"<button class="burger" type="button">☰</button>"#);
//! ```

pub mod document;
pub mod element;
pub mod event;
pub mod html;

pub use document::{Document, HostOptions};
pub use element::{AttrValue, Attrs, ChildSpec, Element, Node, WeakElement, h, listener};
pub use event::{Event, Listener};
