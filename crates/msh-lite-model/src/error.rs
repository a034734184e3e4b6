// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for MSH parsing operations

use std::fmt;
use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Counted data section of an MSH file
///
/// Identifies which table a record-count diagnostic refers to. `$MeshFormat`
/// is not listed because it carries no record count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    /// The optional `$PhysicalNames` section
    PhysicalNames,
    /// The `$Nodes` section
    Nodes,
    /// The `$Elements` section
    Elements,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::PhysicalNames => write!(f, "$PhysicalNames"),
            Section::Nodes => write!(f, "$Nodes"),
            Section::Elements => write!(f, "$Elements"),
        }
    }
}

/// Errors that can occur during MSH parsing
///
/// Every variant is fatal: parsing stops at the first error and no partial
/// mesh is returned.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input stream could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended where another token was required
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// A required section keyword was absent or out of order
    #[error("Expected section keyword `{expected}`, found `{}`", .found.as_deref().unwrap_or("end of input"))]
    MissingSection {
        /// Keyword the grammar required at this point
        expected: &'static str,
        /// Token actually present, or `None` at end of input
        found: Option<String>,
    },

    /// A token could not be parsed as the required numeric type
    #[error("Malformed number `{token}` on line {line}")]
    MalformedNumber {
        /// The offending token
        token: String,
        /// 1-based line number of the token
        line: usize,
    },

    /// A section ended before its declared record count was satisfied
    #[error("Section {section} declared {expected} records, found {actual}")]
    CountMismatch {
        /// Section whose count was wrong
        section: Section,
        /// Record count the section header declared
        expected: usize,
        /// Complete records actually present
        actual: usize,
    },

    /// An element type code outside the schema table
    ///
    /// Fatal because the node list length depends on the type code, so the
    /// record boundary cannot be recovered.
    #[error("Unknown element type code {code}")]
    UnknownElementType {
        /// The unrecognized code
        code: i32,
    },

    /// The format header declares a non-ASCII payload
    #[error("File declares binary encoding, only ASCII is supported")]
    UnsupportedEncoding,

    /// An element declares more tags than the fixed limit
    #[error("Element declares {count} tags, limit is {limit}")]
    TagLimitExceeded {
        /// Tag count the element record declared
        count: usize,
        /// Maximum tags accepted per element
        limit: usize,
    },

    /// A physical name exceeds the fixed length limit
    #[error("Physical name of {length} characters exceeds limit of {limit}")]
    NameTooLong {
        /// Length of the offending name in characters
        length: usize,
        /// Maximum accepted name length
        limit: usize,
    },

    /// Header version rejected under strict version checking
    #[error("Unsupported format version {major}.{minor}")]
    UnsupportedVersion {
        /// Declared major version
        major: i32,
        /// Declared minor version
        minor: i32,
    },
}
