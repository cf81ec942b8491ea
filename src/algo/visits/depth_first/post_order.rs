/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Event;
use crate::algo::visits::Sequential;
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow;
use sux::bits::BitVec;

/// A sequential depth-first visit generating postvisit events.
///
/// This is an iterative implementation that does not need a large stack
/// size. The stack contains plain nodes: when a node is popped for the first
/// time it is marked as known, pushed back, and followed by all its
/// successors that are not known yet. Since the stack is LIFO, the node is
/// popped a second time only after every node pushed above it has been
/// completed, and at that point it is finished. A node may be pushed several
/// times before being discovered; stale copies are ignored when popped.
///
/// The visit uses two bits per node (known and finished) and a stack whose
/// size is bounded by the number of arcs plus the number of nodes.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// each [postvisit event](Event::Postvisit).
///
/// # Examples
///
/// Finishing order of a path (the last node of the path finishes first):
///
/// ```
/// use scc_finder::prelude::*;
/// use dsi_progress_logger::no_logging;
/// use std::ops::ControlFlow::{self, Continue};
/// use no_break::{NoBreak, Unbreakable};
///
/// let graph = EdgeListGraph::from_arcs([(0, 1), (1, 2)]);
/// let mut visit = depth_first::SeqPostOrder::new(graph.forward());
/// let mut order = vec![];
///
/// visit
///     .visit_from_node(
///         0,
///         |event| -> ControlFlow<Unbreakable> {
///             if let depth_first::Event::Postvisit { curr, .. } = event {
///                 order.push(curr);
///             }
///             Continue(())
///         },
///         no_logging![],
///     )
///     .continue_value_no_break();
///
/// assert_eq!(order, vec![2, 1, 0]);
/// ```
pub struct SeqPostOrder<'a, G: RandomAccessGraph> {
    graph: &'a G,
    stack: Vec<usize>,
    known: BitVec,
    finished: BitVec,
}

impl<'a, G: RandomAccessGraph> SeqPostOrder<'a, G> {
    /// Creates a new sequential post-order visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqPostOrder<'a, G> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(num_nodes),
            finished: BitVec::new(num_nodes),
        }
    }
}

impl<G: RandomAccessGraph> Sequential<Event> for SeqPostOrder<'_, G> {
    fn visit_from_node<B, C: FnMut(Event) -> ControlFlow<B, ()>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        if self.known.get(root) {
            return ControlFlow::Continue(());
        }

        callback(Event::Init { root })?;

        // Leftovers of an interrupted visit
        self.stack.clear();
        self.stack.push(root);

        let graph = self.graph;
        while let Some(curr) = self.stack.pop() {
            if !self.known.get(curr) {
                self.known.set(curr, true);
                callback(Event::Previsit { curr, root })?;
                // Popped again once everything pushed above it is finished
                self.stack.push(curr);
                for &succ in graph.successors(curr) {
                    if !self.known.get(succ) {
                        self.stack.push(succ);
                    }
                }
            } else if !self.finished.get(curr) {
                self.finished.set(curr, true);
                callback(Event::Postvisit { curr, root })?;
                pl.light_update();
            }
        }

        callback(Event::Done { root })
    }

    fn visit_all<B, C: FnMut(Event) -> ControlFlow<B, ()>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        for node in 0..self.graph.num_nodes() {
            self.visit_from_node(node, &mut callback, pl)?;
        }

        ControlFlow::Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.reset();
        self.finished.reset();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Csr;
    use dsi_progress_logger::no_logging;
    use std::ops::ControlFlow::{Break, Continue};

    #[test]
    fn test_events() {
        // 0 -> 1, 0 -> 2, 1 -> 2
        let graph = Csr::from_arcs(3, [(0, 1), (0, 2), (1, 2)]);
        let mut visit = SeqPostOrder::new(&graph);
        let mut events = vec![];

        let result = visit.visit_all(
            |event| -> ControlFlow<()> {
                events.push(event);
                Continue(())
            },
            no_logging![],
        );

        assert_eq!(result, Continue(()));
        // Successors are pushed in order, so 2 is explored before 1
        assert_eq!(
            events,
            vec![
                Event::Init { root: 0 },
                Event::Previsit { curr: 0, root: 0 },
                Event::Previsit { curr: 2, root: 0 },
                Event::Postvisit { curr: 2, root: 0 },
                Event::Previsit { curr: 1, root: 0 },
                Event::Postvisit { curr: 1, root: 0 },
                Event::Postvisit { curr: 0, root: 0 },
                Event::Done { root: 0 },
            ]
        );
    }

    #[test]
    fn test_stale_copies() {
        // 2 is pushed twice, by 0 and by 1, before being discovered
        let graph = Csr::from_arcs(3, [(0, 2), (0, 1), (1, 2), (2, 0)]);
        let mut visit = SeqPostOrder::new(&graph);
        let mut finished = vec![];

        let _ = visit.visit_all(
            |event| -> ControlFlow<()> {
                if let Event::Postvisit { curr, .. } = event {
                    finished.push(curr);
                }
                Continue(())
            },
            no_logging![],
        );

        assert_eq!(finished, vec![2, 1, 0]);
    }

    #[test]
    fn test_break_and_reset() {
        let graph = Csr::from_arcs(3, [(0, 1), (1, 2)]);
        let mut visit = SeqPostOrder::new(&graph);

        let result = visit.visit_from_node(
            0,
            |event| match event {
                Event::Previsit { curr: 1, .. } => Break(1),
                _ => Continue(()),
            },
            no_logging![],
        );
        assert_eq!(result, Break(1));

        // Node 0 is known, so nothing happens
        let mut calls = 0;
        let _ = visit.visit_from_node(
            0,
            |_| -> ControlFlow<()> {
                calls += 1;
                Continue(())
            },
            no_logging![],
        );
        assert_eq!(calls, 0);

        visit.reset();
        let mut finished = vec![];
        let _ = visit.visit_from_node(
            0,
            |event| -> ControlFlow<()> {
                if let Event::Postvisit { curr, .. } = event {
                    finished.push(curr);
                }
                Continue(())
            },
            no_logging![],
        );
        assert_eq!(finished, vec![2, 1, 0]);
    }
}
