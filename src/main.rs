//! Driver that prints, for a collection of base graphs, which
//! hierarchy members can discriminate between the two gadget
//! graphs of the base graph's Fürer pair.
//!
//! With a file argument the base graph is read from a plain
//! edge list file instead of the built-in collection.

use rayon::prelude::*;
use std::env;

use swl::{
    compare::compare,
    debug::{print_verdict, Error},
    furer::{furer_pair, FurerPair},
    graph::EdgeList,
    method::Method,
    parser::parse_edge_list,
};

/// Base graphs from the subgraph-WL separation experiments,
/// as arc lists. The first two are sanity checks: the 3-clique
/// gives rise to the 6-cycle vs. two triangles, the 4-clique to
/// the 4×4 rook's graph vs. the Shrikhande graph.
const EXAMPLES: [(&str, &[(usize, usize)]); 10] = [
    (
        "3-clique",
        &[(0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (0, 2)],
    ),
    (
        "4-clique",
        &[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 3),
            (3, 2),
            (3, 0),
            (0, 3),
            (1, 3),
            (3, 1),
            (0, 2),
            (2, 0),
        ],
    ),
    (
        "figure 4",
        &[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (0, 2),
            (1, 3),
            (3, 1),
            (2, 3),
            (3, 2),
            (3, 4),
            (4, 3),
            (4, 5),
            (5, 4),
            (3, 5),
            (5, 3),
            (4, 6),
            (6, 4),
            (5, 6),
            (6, 5),
        ],
    ),
    (
        "figure 5",
        &[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (0, 2),
            (0, 3),
            (3, 0),
            (0, 4),
            (4, 0),
            (3, 4),
            (4, 3),
            (3, 7),
            (7, 3),
            (4, 7),
            (7, 4),
            (5, 6),
            (6, 5),
            (6, 7),
            (7, 6),
            (5, 7),
            (7, 5),
        ],
    ),
    (
        "figure 6",
        &[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (0, 2),
            (1, 3),
            (3, 1),
            (2, 3),
            (3, 2),
            (3, 4),
            (4, 3),
            (4, 5),
            (5, 4),
            (5, 3),
            (3, 5),
            (5, 6),
            (6, 5),
            (6, 7),
            (7, 6),
            (7, 5),
            (5, 7),
            (6, 8),
            (8, 6),
            (7, 8),
            (8, 7),
        ],
    ),
    (
        "figure 7",
        &[
            (0, 1),
            (1, 0),
            (0, 2),
            (2, 0),
            (1, 3),
            (3, 1),
            (2, 3),
            (3, 2),
            (2, 4),
            (4, 2),
            (4, 5),
            (5, 4),
            (5, 3),
            (3, 5),
            (4, 6),
            (6, 4),
            (6, 7),
            (7, 6),
            (7, 5),
            (5, 7),
        ],
    ),
    (
        "figure 8",
        &[
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (0, 2),
            (1, 3),
            (3, 1),
            (3, 4),
            (4, 3),
            (4, 1),
            (1, 4),
            (2, 4),
            (4, 2),
            (4, 5),
            (5, 4),
            (5, 2),
            (2, 5),
        ],
    ),
    (
        "figure 9",
        &[
            (0, 1),
            (1, 0),
            (1, 3),
            (3, 1),
            (3, 5),
            (5, 3),
            (5, 4),
            (4, 5),
            (4, 2),
            (2, 4),
            (2, 0),
            (0, 2),
            (0, 6),
            (6, 0),
            (6, 4),
            (4, 6),
            (1, 7),
            (7, 1),
            (7, 5),
            (5, 7),
        ],
    ),
    (
        "figure 10",
        &[
            (0, 3),
            (3, 0),
            (3, 1),
            (1, 3),
            (1, 7),
            (7, 1),
            (7, 2),
            (2, 7),
            (2, 5),
            (5, 2),
            (5, 0),
            (0, 5),
            (0, 4),
            (4, 0),
            (4, 1),
            (1, 4),
            (1, 8),
            (8, 1),
            (8, 2),
            (2, 8),
            (2, 6),
            (6, 2),
            (6, 0),
            (0, 6),
        ],
    ),
    (
        "figure 11",
        &[
            (0, 2),
            (2, 0),
            (2, 5),
            (5, 2),
            (5, 7),
            (7, 5),
            (7, 8),
            (8, 7),
            (8, 11),
            (11, 8),
            (11, 14),
            (14, 11),
            (14, 12),
            (12, 14),
            (12, 9),
            (9, 12),
            (9, 7),
            (7, 9),
            (7, 6),
            (6, 7),
            (6, 3),
            (3, 6),
            (3, 0),
            (0, 3),
            (0, 1),
            (1, 0),
            (1, 5),
            (5, 1),
            (8, 10),
            (10, 8),
            (10, 14),
            (14, 10),
            (14, 13),
            (13, 14),
            (13, 9),
            (9, 13),
            (0, 4),
            (4, 0),
            (4, 6),
            (6, 4),
        ],
    ),
];

/// The twenty 2-D catalog members, in canonical order.
fn table_methods() -> Vec<Method> {
    Method::ALL
        .iter()
        .filter(|method| !matches!(**method, Method::Wl1 | Method::I2wl))
        .copied()
        .collect()
}

/// Evaluate all table methods on one graph pair. The runs are
/// independent, so they execute in parallel.
fn print_table(
    g_edges: &EdgeList,
    h_edges: &EdgeList,
    g_precolour: &[usize],
    h_precolour: &[usize],
) -> Result<(), Error> {
    let verdicts = table_methods()
        .into_par_iter()
        .map(|method| {
            compare(
                method,
                g_edges,
                h_edges,
                Some(g_precolour),
                Some(h_precolour),
            )
            .map(|distinguishes| (method, distinguishes))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    for (method, distinguishes) in verdicts {
        print_verdict(method.name(), distinguishes);
    }
    Ok(())
}

fn print_furer_table(name: &str, base: &[(usize, usize)]) -> Result<(), Error> {
    let FurerPair {
        g_edges,
        h_edges,
        g_precolour,
        h_precolour,
    } = furer_pair(base)?;

    println!("On {}:", name);
    print_table(&g_edges, &h_edges, &g_precolour, &h_precolour)
}

/// Composite example: four copies of the 3-clique gadget
/// pair, each wired to its own hub vertex, the hubs forming a
/// 4-cycle. The two assemblies differ only in which copies
/// carry the twist.
fn print_box_table() -> Result<(), Error> {
    let FurerPair {
        g_edges: base_g,
        h_edges: base_h,
        ..
    } = furer_pair(EXAMPLES[0].1)?;

    let assemble = |blocks: [&EdgeList; 4]| -> EdgeList {
        let mut edges = Vec::new();
        for (block, block_edges) in blocks.iter().enumerate() {
            let offset = block * 6;
            edges.extend(block_edges.iter().map(|(a, b)| (a + offset, b + offset)));
            for vertex in offset..offset + 6 {
                edges.push((vertex, 24 + block));
                edges.push((24 + block, vertex));
            }
        }
        for (hub, next_hub) in &[(24, 25), (25, 26), (26, 27), (27, 24)] {
            edges.push((*hub, *next_hub));
            edges.push((*next_hub, *hub));
        }
        edges
    };

    let g = assemble([&base_g, &base_h, &base_g, &base_h]);
    let h = assemble([&base_g, &base_g, &base_h, &base_h]);
    let precolour: Vec<usize> = (0..28).map(|vertex| if vertex < 24 { 0 } else { 1 }).collect();

    println!("On box graph:");
    print_table(&g, &h, &precolour, &precolour)
}

fn main() -> Result<(), Error> {
    if let Some(path) = env::args().nth(1) {
        let contents = std::fs::read_to_string(path)?;
        let base = parse_edge_list(&contents)?;
        return print_furer_table("input graph", &base);
    }

    print_box_table()?;

    for (name, base) in &EXAMPLES {
        print_furer_table(name, base)?;
    }

    Ok(())
}
