// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for parsed MSH mesh data
//!
//! This module defines the tables produced by parsing an ASCII MSH file:
//! the format header, physical region names, nodes, and elements.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format revision this crate understands, as (major, minor)
pub const SUPPORTED_VERSION: (i32, i32) = (2, 2);

/// Maximum number of integer tags one element record may carry
pub const MAX_ELEMENT_TAGS: usize = 10;

/// Maximum length of a physical region name, in characters
pub const MAX_NAME_LEN: usize = 32;

/// Type-safe node identifier
///
/// Wraps the raw node number from the `$Nodes` section. Numbers are taken
/// from the file as-is: they are not required to be contiguous, 1-based,
/// or even unique.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for i64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Type-safe element identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ElementId {
    fn from(id: i64) -> Self {
        ElementId(id)
    }
}

impl From<ElementId> for i64 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// Element shape enumeration
///
/// One variant per supported type code of the `$Elements` section. The code
/// and the per-element node count are fixed by the file format and exposed
/// through [`ElementKind::from_code`] and [`ElementKind::node_count`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ElementKind {
    /// 2-node line
    Line2,
    /// 3-node triangle
    Triangle3,
    /// 4-node quadrangle
    Quad4,
    /// 4-node tetrahedron
    Tetra4,
    /// 5-node pyramid
    Pyramid5,
    /// 6-node prism
    Prism6,
    /// 8-node hexahedron
    Hexa8,
}

impl ElementKind {
    /// All supported kinds, in type-code order
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Line2,
        ElementKind::Triangle3,
        ElementKind::Quad4,
        ElementKind::Tetra4,
        ElementKind::Pyramid5,
        ElementKind::Prism6,
        ElementKind::Hexa8,
    ];

    /// Resolve a type code from an element record
    ///
    /// Returns `None` for codes outside the supported table.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ElementKind::Line2),
            2 => Some(ElementKind::Triangle3),
            3 => Some(ElementKind::Quad4),
            4 => Some(ElementKind::Tetra4),
            5 => Some(ElementKind::Pyramid5),
            6 => Some(ElementKind::Prism6),
            7 => Some(ElementKind::Hexa8),
            _ => None,
        }
    }

    /// Numeric type code of this kind
    pub fn code(&self) -> i32 {
        match self {
            ElementKind::Line2 => 1,
            ElementKind::Triangle3 => 2,
            ElementKind::Quad4 => 3,
            ElementKind::Tetra4 => 4,
            ElementKind::Pyramid5 => 5,
            ElementKind::Prism6 => 6,
            ElementKind::Hexa8 => 7,
        }
    }

    /// Number of node references one element of this kind carries
    pub fn node_count(&self) -> usize {
        match self {
            ElementKind::Line2 => 2,
            ElementKind::Triangle3 => 3,
            ElementKind::Quad4 => 4,
            ElementKind::Tetra4 => 4,
            ElementKind::Pyramid5 => 5,
            ElementKind::Prism6 => 6,
            ElementKind::Hexa8 => 8,
        }
    }

    /// Spatial dimension of the shape (1 for lines, 2 for faces, 3 for cells)
    pub fn dimension(&self) -> u32 {
        match self {
            ElementKind::Line2 => 1,
            ElementKind::Triangle3 | ElementKind::Quad4 => 2,
            ElementKind::Tetra4 | ElementKind::Pyramid5 | ElementKind::Prism6
            | ElementKind::Hexa8 => 3,
        }
    }

    /// Get the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Line2 => "Line2",
            ElementKind::Triangle3 => "Triangle3",
            ElementKind::Quad4 => "Quad4",
            ElementKind::Tetra4 => "Tetra4",
            ElementKind::Pyramid5 => "Pyramid5",
            ElementKind::Prism6 => "Prism6",
            ElementKind::Hexa8 => "Hexa8",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parsed `$MeshFormat` header
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct FormatHeader {
    /// Declared major format version
    pub version_major: i32,
    /// Declared minor format version
    pub version_minor: i32,
    /// True when the file-type flag declares a non-ASCII payload
    pub is_binary: bool,
    /// Declared size of one data word in bytes (8 for IEEE doubles)
    pub word_size: i32,
}

impl FormatHeader {
    /// Check the declared version against [`SUPPORTED_VERSION`]
    pub fn is_supported_version(&self) -> bool {
        (self.version_major, self.version_minor) == SUPPORTED_VERSION
    }
}

/// Named physical region from the optional `$PhysicalNames` section
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PhysicalRegion {
    /// Geometric dimension of the region (0-3 by convention, not validated)
    pub dimension: i32,
    /// Region tag, referenced by element tag lists
    pub tag: i64,
    /// Region name, at most [`MAX_NAME_LEN`] characters
    pub name: String,
}

/// Single mesh node
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Node {
    /// Node number from the file
    pub id: NodeId,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Node {
    /// Coordinates as an array, in file order
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Single finite element
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Element {
    /// Element number from the file
    pub id: ElementId,
    /// Element shape
    pub kind: ElementKind,
    /// Integer tags in file order
    ///
    /// The first tag names a physical region and the second a geometric
    /// entity by convention; neither is required to be present.
    pub tags: Vec<i64>,
    /// Referenced nodes, exactly `kind.node_count()` of them
    pub nodes: Vec<NodeId>,
}

impl Element {
    /// Physical region tag (first tag), if present
    pub fn physical_tag(&self) -> Option<i64> {
        self.tags.first().copied()
    }

    /// Geometric entity tag (second tag), if present
    pub fn geometric_tag(&self) -> Option<i64> {
        self.tags.get(1).copied()
    }
}

/// Non-fatal issue recorded during parsing
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ParseWarning {
    /// Header version differs from [`SUPPORTED_VERSION`]
    UnsupportedVersion {
        /// Declared major version
        major: i32,
        /// Declared minor version
        minor: i32,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::UnsupportedVersion { major, minor } => {
                write!(
                    f,
                    "format version {}.{} differs from supported {}.{}",
                    major, minor, SUPPORTED_VERSION.0, SUPPORTED_VERSION.1
                )
            }
        }
    }
}

/// Fully parsed mesh document
///
/// Owns every table read from one input. A parse either produces a complete
/// `MshMesh` or fails with a [`ParseError`](crate::ParseError); there are no
/// partial results and no state shared between parses.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MshMesh {
    /// Parsed `$MeshFormat` header
    pub header: FormatHeader,
    /// Regions from `$PhysicalNames`, empty when the section is absent
    pub physical_regions: Vec<PhysicalRegion>,
    /// Nodes in file order
    pub nodes: Vec<Node>,
    /// Elements in file order
    pub elements: Vec<Element>,
    /// Non-fatal issues found while parsing
    pub warnings: Vec<ParseWarning>,
}

impl MshMesh {
    /// Build a node id to table position index over [`nodes`](Self::nodes)
    ///
    /// Node numbers are not validated during parsing; when a number repeats,
    /// the first occurrence wins.
    pub fn node_index(&self) -> FxHashMap<NodeId, usize> {
        let mut index =
            FxHashMap::with_capacity_and_hasher(self.nodes.len(), Default::default());
        for (pos, node) in self.nodes.iter().enumerate() {
            index.entry(node.id).or_insert(pos);
        }
        index
    }

    /// Iterate over elements of one kind, in file order
    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }

    /// Look up a physical region name by tag
    pub fn region_name(&self, tag: i64) -> Option<&str> {
        self.physical_regions
            .iter()
            .find(|r| r.tag == tag)
            .map(|r| r.name.as_str())
    }
}
