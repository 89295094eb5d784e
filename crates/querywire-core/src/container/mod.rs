//! # Querywire Service Container
//!
//! Service definitions and the two container states they live in.
//!
//! - [`ContainerBuilder`]: mutable; bundles and configuration register
//!   [`Definition`]s here and compiler passes rewrite them.
//! - [`Container`]: the frozen result of [`ContainerBuilder::compile`].
//!
//! Definitions address each other through [`Reference`]s and carry named
//! [`Argument`]s and [`Tag`]s. Tags group services into categories; their
//! `priority` attribute orders them inside a category.
pub mod builder;
pub mod compiled;
pub mod definition;
pub mod error;

pub use builder::ContainerBuilder;
pub use compiled::Container;
pub use definition::{Argument, Definition, Reference, Tag, TagAttributes};
pub use error::{ContainerError, Result};
