/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::algo::{finish_order, visits::depth_first::*, visits::Sequential};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::{NoBreak, Unbreakable};
use std::ops::ControlFlow::{self, Continue};

/// Computes the strongly connected components of a graph using Kosaraju's algorithm.
///
/// The first pass computes the [finish order](finish_order()) of a visit of
/// `transpose`. The second pass visits `graph`, using as roots the nodes in
/// reverse finish order: each visit tree is a strongly connected component.
/// Components are numbered in order of discovery.
///
/// The two passes use distinct visit states.
///
/// # Arguments
/// * `graph`: the graph.
/// * `transpose`: the transpose of `graph`.
/// * `pl`: a progress logger.
///
/// # Examples
///
/// ```
/// use scc_finder::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = EdgeListGraph::from_arcs([(1, 2), (2, 3), (3, 1), (3, 4)]);
/// let sccs = sccs::kosaraju(graph.forward(), graph.transpose(), no_logging![]);
///
/// assert_eq!(sccs.num_components(), 2);
/// assert_eq!(&*sccs.sizes_desc(), &[3, 1]);
/// ```
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(transpose.num_nodes(), num_nodes);

    let order = finish_order(&transpose, pl);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut number_of_components = 0;
    let mut visit = SeqFlood::new(&graph);
    let mut components = vec![0; num_nodes].into_boxed_slice();

    visit
        .visit(
            order.iter().rev().copied(),
            |event| -> ControlFlow<Unbreakable> {
                match event {
                    Event::Previsit { curr, .. } => {
                        components[curr] = number_of_components;
                    }
                    Event::Done { .. } => {
                        number_of_components += 1;
                    }
                    _ => (),
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();

    log::info!("Found {} strongly connected components", number_of_components);

    Sccs::new(number_of_components, components)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Csr;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_components_in_discovery_order() {
        // 0 -> 1 -> 2 -> 0, 2 -> 3
        let arcs = [(0, 1), (1, 2), (2, 0), (2, 3)];
        let graph = Csr::from_arcs(4, arcs);
        let transpose = Csr::from_arcs(4, arcs.iter().map(|&(x, y)| (y, x)));

        let sccs = kosaraju(&graph, &transpose, no_logging![]);

        // 3 finishes last on the transpose, so it is the first root
        assert_eq!(sccs.num_components(), 2);
        assert_eq!(sccs.components(), &[1, 1, 1, 0]);
        assert_eq!(sccs.compute_sizes(), vec![1, 3].into_boxed_slice());
    }
}
