// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MSH-Lite Parser - ASCII MSH mesh file parser
//!
//! This crate reads the sectioned ASCII MSH format (format header, optional
//! physical names, nodes, elements) into the owned tables defined in
//! `msh-lite-model`.
//!
//! # Features
//!
//! - **Single-pass token scanning** - records are whitespace-delimited, with
//!   one probe point for the optional `$PhysicalNames` section
//! - **Static element schema** - per-record node counts resolved from the
//!   type code, so element records never desynchronize the stream
//! - **Typed errors** - every failure names the offending token, line,
//!   or section
//! - **Owned results** - each parse returns a self-contained
//!   [`MshMesh`](msh_lite_model::MshMesh), safe to keep across later parses
//!
//! # Example
//!
//! ```
//! let content = concat!(
//!     "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n",
//!     "$Nodes\n1\n1 0.0 0.0 0.0\n$EndNodes\n",
//!     "$Elements\n0\n$EndElements\n",
//! );
//!
//! let mesh = msh_lite_parser::parse(content).unwrap();
//! assert_eq!(mesh.nodes.len(), 1);
//! assert!(mesh.elements.is_empty());
//! ```

mod scanner;
mod sections;

pub use scanner::{ScanMark, TokenScanner};
pub use sections::{read_elements, read_format, read_nodes, read_physical_names};

use msh_lite_model::{FormatHeader, MshMesh, ParseError, ParseWarning, Result};
use std::io;

/// Main MSH parser
///
/// This is the entry point for parsing MSH content. The free [`parse`] and
/// [`parse_reader`] functions cover the default settings; the struct exists
/// for callers that want to adjust them.
#[derive(Default)]
pub struct MshParser {
    /// Whether header versions other than the supported one are fatal
    pub strict_version: bool,
}

impl MshParser {
    /// Create a new parser with default settings
    pub fn new() -> Self {
        Self {
            strict_version: false,
        }
    }

    /// Set whether unsupported header versions abort the parse
    ///
    /// By default they are recorded as a warning on the result instead.
    pub fn with_strict_version(mut self, enabled: bool) -> Self {
        self.strict_version = enabled;
        self
    }

    /// Parse a complete MSH document
    pub fn parse(&self, content: &str) -> Result<MshMesh> {
        let mut scan = TokenScanner::new(content);

        let header = read_format(&mut scan)?;
        if header.is_binary {
            return Err(ParseError::UnsupportedEncoding);
        }

        let mut warnings = Vec::new();
        if !header.is_supported_version() {
            if self.strict_version {
                return Err(ParseError::UnsupportedVersion {
                    major: header.version_major,
                    minor: header.version_minor,
                });
            }
            warnings.push(ParseWarning::UnsupportedVersion {
                major: header.version_major,
                minor: header.version_minor,
            });
        }

        let physical_regions = read_physical_names(&mut scan)?;
        let nodes = read_nodes(&mut scan)?;
        let elements = read_elements(&mut scan)?;

        Ok(MshMesh {
            header,
            physical_regions,
            nodes,
            elements,
            warnings,
        })
    }

    /// Read a stream to its end and parse the contents
    ///
    /// The stream is the caller's: opening, buffering, and closing stay on
    /// the caller's side. Read failures and non-UTF-8 content surface as
    /// [`ParseError::Io`].
    pub fn parse_reader(&self, mut reader: impl io::Read) -> Result<MshMesh> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse(&content)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<MshMesh> {
    MshParser::new().parse(content)
}

/// Read a stream to its end and parse with default settings
pub fn parse_reader(reader: impl io::Read) -> Result<MshMesh> {
    MshParser::new().parse_reader(reader)
}

/// Parse only the `$MeshFormat` section
///
/// Useful for inspecting the version and encoding flag before committing to
/// a full parse. Unlike [`parse`], this succeeds on files that declare a
/// binary payload, since the header itself is always ASCII.
pub fn parse_format_header(content: &str) -> Result<FormatHeader> {
    let mut scan = TokenScanner::new(content);
    read_format(&mut scan)
}
