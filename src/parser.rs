//! Parser for plain edge list files: one `start end` pair per
//! line, `#` starts a comment. Every line describes one
//! undirected edge; both arcs are added to the result.

use crate::{
    debug::Error,
    graph::{EdgeList, VertexIndex},
};

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

fn parse_vertex_index(input: Input<'_>) -> ParseResult<'_, VertexIndex> {
    use nom::{character::complete::digit1, combinator::map_res};
    map_res(digit1, |index_str: &str| index_str.parse())(input)
}

/// Parse one `start end` edge line.
fn parse_edge_line(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{
        character::complete::{space0, space1},
        combinator::all_consuming,
        error::context,
        sequence::{delimited, separated_pair},
    };

    let mut edge = context(
        "Edge line with two vertex indices",
        all_consuming(delimited(
            space0,
            separated_pair(parse_vertex_index, space1, parse_vertex_index),
            space0,
        )),
    );

    edge(input)
}

/// Parse a whole edge list file into an arc list.
pub fn parse_edge_list(contents: &str) -> Result<EdgeList, Error> {
    let mut arcs = Vec::new();

    for line in contents.lines() {
        let line = match line.find('#') {
            Some(comment_start) => &line[..comment_start],
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let (_, (start, end)) = parse_edge_line(line)?;
        arcs.push((start, end));
        arcs.push((end, start));
    }

    Ok(arcs)
}
