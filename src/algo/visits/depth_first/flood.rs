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

/// A sequential depth-first reachability visit.
///
/// Nodes are discovered in depth-first order, but no postvisit event is
/// generated, so there is no need to push nodes twice: it can be used, for
/// example, to compute reachability information, or to label the nodes of
/// each visit tree.
///
/// The visit uses one bit per node to remember known nodes, and its stack
/// size is bounded by the number of arcs plus one.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// each [previsit event](Event::Previsit).
pub struct SeqFlood<'a, G: RandomAccessGraph> {
    graph: &'a G,
    stack: Vec<usize>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph> SeqFlood<'a, G> {
    /// Creates a new sequential reachability visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqFlood<'a, G> {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }
}

impl<G: RandomAccessGraph> Sequential<Event> for SeqFlood<'_, G> {
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

        self.stack.clear();
        self.stack.push(root);

        let graph = self.graph;
        while let Some(curr) = self.stack.pop() {
            if self.known.get(curr) {
                continue;
            }
            self.known.set(curr, true);
            callback(Event::Previsit { curr, root })?;
            pl.light_update();

            for &succ in graph.successors(curr) {
                if !self.known.get(succ) {
                    self.stack.push(succ);
                }
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
    }
}
