// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MSH-Lite Model - Shared types and errors for MSH mesh parsing
//!
//! This crate defines the data model for the ASCII MSH mesh format: the
//! tables a parse produces and the errors a parse can fail with. It carries
//! no parsing logic of its own; the `msh-lite-parser` crate fills these
//! types from file content.
//!
//! # Architecture
//!
//! The model mirrors the four sections of an MSH file:
//!
//! - [`FormatHeader`] - the `$MeshFormat` section
//! - [`PhysicalRegion`] - one record of the optional `$PhysicalNames` section
//! - [`Node`] - one record of the `$Nodes` section
//! - [`Element`] - one record of the `$Elements` section
//!
//! A complete parse is collected into an owned [`MshMesh`]. Failures are
//! reported through [`ParseError`], with one variant per failure class.
//!
//! # Example
//!
//! ```
//! use msh_lite_model::ElementKind;
//!
//! let kind = ElementKind::from_code(4).unwrap();
//! assert_eq!(kind, ElementKind::Tetra4);
//! assert_eq!(kind.node_count(), 4);
//! ```

pub mod error;
pub mod types;

// Re-export all public types
pub use error::*;
pub use types::*;
