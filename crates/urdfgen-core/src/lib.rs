//! Robot description model with JSON and URDF export
//!
//! This crate contains the core data structures and exporters:
//! - Component: links and joints with identity and export capabilities
//! - Robot: named container of components, keyed by name
//! - Exporters: JSON snapshot and URDF generation (fragment synthesis +
//!   tree assembly + pretty-printing)

pub mod component;
pub mod error;
pub mod export;
pub mod robot;

pub use component::{Component, ComponentRecord, Joint, JointKind, Link};
pub use error::ExportError;
pub use robot::Robot;
