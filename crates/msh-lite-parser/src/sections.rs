// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Section parsers for the four MSH file sections
//!
//! Each parser consumes one `$Name` ... `$EndName` bracket off the scanner
//! and returns its table. Sections appear in fixed order; only
//! `$PhysicalNames` is optional, probed with the scanner's single
//! mark/restore point.

use crate::scanner::{parse_num, TokenScanner};
use msh_lite_model::{
    Element, ElementId, ElementKind, FormatHeader, Node, NodeId, ParseError, PhysicalRegion,
    Result, Section, MAX_ELEMENT_TAGS, MAX_NAME_LEN,
};

// Declared record counts are untrusted input; cap the preallocation.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Parse `$MeshFormat` ... `$EndMeshFormat`
///
/// The encoding flag and version are returned as found; whether they are
/// acceptable is the caller's decision.
pub fn read_format(scan: &mut TokenScanner<'_>) -> Result<FormatHeader> {
    scan.expect_keyword("$MeshFormat")?;

    let version = scan.next_token()?;
    let (version_major, version_minor) = split_version(version, scan.line())?;
    let file_type = scan.next_i32()?;
    let word_size = scan.next_i32()?;

    scan.expect_keyword("$EndMeshFormat")?;

    Ok(FormatHeader {
        version_major,
        version_minor,
        is_binary: file_type != 0,
        word_size,
    })
}

/// Split a `major.minor` version token into its integer parts
fn split_version(token: &str, line: usize) -> Result<(i32, i32)> {
    let malformed = || ParseError::MalformedNumber {
        token: token.to_string(),
        line,
    };

    let (major, minor) = token.split_once('.').ok_or_else(malformed)?;
    Ok((
        major.parse().map_err(|_| malformed())?,
        minor.parse().map_err(|_| malformed())?,
    ))
}

/// Parse the optional `$PhysicalNames` ... `$EndPhysicalNames` section
///
/// Probes one token; when it is not the section keyword the position is
/// restored and the empty table is returned, leaving the token for the
/// `$Nodes` parser.
pub fn read_physical_names(scan: &mut TokenScanner<'_>) -> Result<Vec<PhysicalRegion>> {
    let mark = scan.mark();
    match scan.next_token() {
        Ok("$PhysicalNames") => {}
        Ok(_) | Err(ParseError::UnexpectedEof) => {
            scan.restore(mark);
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    }

    let expected = scan.next_count()?;
    let mut regions = Vec::with_capacity(expected.min(PREALLOC_LIMIT));
    let mut records = RecordReader::new(scan, Section::PhysicalNames, expected);

    for _ in 0..expected {
        let dimension: i32 = records.num()?;
        let tag: i64 = records.num()?;

        let name = unquote(records.token()?);
        let length = name.chars().count();
        if length > MAX_NAME_LEN {
            return Err(ParseError::NameTooLong {
                length,
                limit: MAX_NAME_LEN,
            });
        }

        regions.push(PhysicalRegion {
            dimension,
            tag,
            name: name.to_string(),
        });
        records.finish();
    }

    scan.expect_keyword("$EndPhysicalNames")?;
    Ok(regions)
}

/// Parse `$Nodes` ... `$EndNodes`
pub fn read_nodes(scan: &mut TokenScanner<'_>) -> Result<Vec<Node>> {
    scan.expect_keyword("$Nodes")?;

    let expected = scan.next_count()?;
    let mut nodes = Vec::with_capacity(expected.min(PREALLOC_LIMIT));
    let mut records = RecordReader::new(scan, Section::Nodes, expected);

    for _ in 0..expected {
        nodes.push(Node {
            id: NodeId(records.num()?),
            x: records.num()?,
            y: records.num()?,
            z: records.num()?,
        });
        records.finish();
    }

    scan.expect_keyword("$EndNodes")?;
    Ok(nodes)
}

/// Parse `$Elements` ... `$EndElements`
pub fn read_elements(scan: &mut TokenScanner<'_>) -> Result<Vec<Element>> {
    scan.expect_keyword("$Elements")?;

    let expected = scan.next_count()?;
    let mut elements = Vec::with_capacity(expected.min(PREALLOC_LIMIT));
    let mut records = RecordReader::new(scan, Section::Elements, expected);

    for _ in 0..expected {
        let id = ElementId(records.num()?);
        let type_code: i32 = records.num()?;

        let tag_count: usize = records.num()?;
        if tag_count > MAX_ELEMENT_TAGS {
            return Err(ParseError::TagLimitExceeded {
                count: tag_count,
                limit: MAX_ELEMENT_TAGS,
            });
        }
        let mut tags = Vec::with_capacity(tag_count);
        for _ in 0..tag_count {
            tags.push(records.num()?);
        }

        // The node list length depends on the type code, so an unknown code
        // leaves the record boundary undecidable and must be fatal.
        let kind = ElementKind::from_code(type_code)
            .ok_or(ParseError::UnknownElementType { code: type_code })?;
        let mut nodes = Vec::with_capacity(kind.node_count());
        for _ in 0..kind.node_count() {
            nodes.push(NodeId(records.num()?));
        }

        elements.push(Element {
            id,
            kind,
            tags,
            nodes,
        });
        records.finish();
    }

    scan.expect_keyword("$EndElements")?;
    Ok(elements)
}

/// Record-field reader for one counted section
///
/// Inside a record, running out of input or hitting a `$` keyword means the
/// section held fewer records than its count declared. Routing every field
/// read through this adapter turns both cases into
/// [`ParseError::CountMismatch`] with the number of complete records.
struct RecordReader<'s, 'a> {
    scan: &'s mut TokenScanner<'a>,
    section: Section,
    expected: usize,
    complete: usize,
}

impl<'s, 'a> RecordReader<'s, 'a> {
    fn new(scan: &'s mut TokenScanner<'a>, section: Section, expected: usize) -> Self {
        Self {
            scan,
            section,
            expected,
            complete: 0,
        }
    }

    fn mismatch(&self) -> ParseError {
        ParseError::CountMismatch {
            section: self.section,
            expected: self.expected,
            actual: self.complete,
        }
    }

    /// Read one record field as a raw token
    fn token(&mut self) -> Result<&'a str> {
        match self.scan.next_token() {
            Ok(token) if token.starts_with('$') => Err(self.mismatch()),
            Ok(token) => Ok(token),
            Err(ParseError::UnexpectedEof) => Err(self.mismatch()),
            Err(err) => Err(err),
        }
    }

    /// Read one record field as a number
    fn num<N: lexical_core::FromLexical>(&mut self) -> Result<N> {
        let token = self.token()?;
        parse_num(token, self.scan.line())
    }

    /// Mark the current record as completely read
    fn finish(&mut self) {
        self.complete += 1;
    }
}

/// Strip one pair of surrounding double quotes, if present
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}
