//! Central error type and output facilities for the driver.

use nom::error::{VerboseError, VerboseErrorKind};
use std::{fmt::Debug, io};

use crate::{
    graph::{GraphError, VertexIndex},
    method::MethodError,
    parser::ParseError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph construction error")]
    Graph(GraphError),
    #[error("Unknown refinement method")]
    Method(MethodError),
    #[error("Precolouring has {found} entries but the graph has {expected} vertices")]
    PrecolourMismatch { expected: usize, found: usize },
    #[error("Twisted pair ({0}, {1}) is not an edge of the base graph")]
    TwistNotAnEdge(VertexIndex, VertexIndex),
    #[error("Vertex {0} carries a self-loop, which the gadget construction rejects")]
    SelfLoop(VertexIndex),
    #[error("The gadget construction needs at least one edge")]
    EmptyGraph,
    #[error("Error while parsing the edge list file")]
    Parse(Vec<VerboseErrorKind>),
    #[error("Error while reading the edge list file")]
    Io(io::Error),
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::Graph(ge)
    }
}

impl From<MethodError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(me: MethodError) -> Self {
        Self::Method(me)
    }
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                Self::Parse(handle_nom_verbose_error(verbose))
            }
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

impl From<io::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ie: io::Error) -> Self {
        Self::Io(ie)
    }
}

#[cfg(not(tarpaulin_include))]
fn handle_nom_verbose_error<E: Debug>(verbose: VerboseError<E>) -> Vec<VerboseErrorKind> {
    verbose
        .errors
        .into_iter()
        .map(|(msg, kind)| {
            eprintln!("{:?}", msg);
            kind
        })
        .collect()
}

/// Print one row of a separation table.
#[cfg(not(tarpaulin_include))]
pub fn print_verdict(method: &str, distinguishes: bool) {
    println!(
        "{} {} discriminate b/w G & H.",
        method,
        if distinguishes { "can" } else { "cannot" }
    );
}
