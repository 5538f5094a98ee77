use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("a {rows}x{cols} matrix cannot hold a {min_rows}x{min_cols} matrix")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("edge ({src}, {dst}) is out of range: {kind} (vertex count is {vertex_count})")]
pub struct IndexOutOfRange {
    pub src: usize,
    pub dst: usize,
    pub vertex_count: usize,
    pub kind: EndpointKind,
}

impl IndexOutOfRange {
    pub fn new(src: usize, dst: usize, vertex_count: usize, kind: EndpointKind) -> Self {
        Self {
            src,
            dst,
            vertex_count,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Source,
    Destination,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EndpointKind::Source => "source does not exist",
            EndpointKind::Destination => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("reading records failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Edge(#[from] IndexOutOfRange),
    #[error("line {line}: missing {token} token")]
    MissingToken { line: usize, token: Token },
    #[error("line {line}: invalid {token} token {text:?}")]
    InvalidToken {
        line: usize,
        token: Token,
        text: String,
    },
}

/// Position of a token within an ingested record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Source,
    Destination,
    Weight,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Source => "source",
            Token::Destination => "destination",
            Token::Weight => "weight",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = IndexOutOfRange::new(3, 0, 2, EndpointKind::Source);
        assert_eq!(
            err.to_string(),
            "edge (3, 0) is out of range: source does not exist (vertex count is 2)"
        );

        let err = MatrixError::SizeMismatch {
            rows: 2,
            cols: 2,
            min_rows: 3,
            min_cols: 1,
        };
        assert_eq!(err.to_string(), "a 2x2 matrix cannot hold a 3x1 matrix");

        let err = IngestError::InvalidToken {
            line: 4,
            token: Token::Weight,
            text: String::from("x"),
        };
        assert_eq!(err.to_string(), "line 4: invalid weight token \"x\"");
    }
}
