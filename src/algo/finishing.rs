/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::{NoBreak, Unbreakable};
use std::ops::ControlFlow::{self, Continue};

/// Returns the nodes of a graph in order of completion of a depth-first
/// visit of the whole graph.
///
/// Roots are tried in increasing order. Every node appears exactly once, and
/// a node appears after all the nodes that were discovered while it was
/// being visited; in particular, on an acyclic graph every node appears
/// after all its successors.
///
/// In Kosaraju's algorithm this is the first pass, performed on the
/// transpose: the last node of the returned order is the first root of the
/// second pass.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn finish_order(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing finish order...");

    let mut visit = SeqPostOrder::new(&graph);
    let mut order = Vec::with_capacity(num_nodes);

    visit
        .visit_all(
            |event| -> ControlFlow<Unbreakable> {
                if let Event::Postvisit { curr, .. } = event {
                    order.push(curr);
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();

    debug_assert_eq!(order.len(), num_nodes);
    order.into_boxed_slice()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Csr;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_finish_order_of_cycle_with_tail() {
        // 0 -> 1 -> 2 -> 0, 2 -> 3, visited on the transpose
        let transpose = Csr::from_arcs(4, [(1, 0), (2, 1), (0, 2), (3, 2)]);
        assert_eq!(&*finish_order(&transpose, no_logging![]), &[1, 2, 0, 3]);
    }

    #[test]
    fn test_finish_order_empty() {
        assert!(finish_order(Csr::default(), no_logging![]).is_empty());
    }
}
