/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits are iterative: they use an explicit stack allocated on the heap,
//! so their depth is not bounded by the size of the call stack.
//!
//! Each visit invokes a callback on the events it generates. The callback
//! returns a [`ControlFlow`]: returning [`Break`](ControlFlow::Break)
//! interrupts the visit, and the value is returned to the caller. Callbacks
//! that never interrupt the visit can use [`Unbreakable`](no_break::Unbreakable)
//! as break type, and the result can be unwrapped with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{self, Continue};

/// A sequential visit.
///
/// Implementations must provide [`visit_from_node`](Sequential::visit_from_node),
/// which visits the nodes reachable from a root that have not been
/// discovered yet, [`visit_all`](Sequential::visit_all), which visits the
/// whole graph, and [`reset`](Sequential::reset).
///
/// The discovery state is kept across calls, so a sequence of calls with
/// different roots partitions the nodes into visit trees.
pub trait Sequential<E> {
    /// Visits the graph from the specified node.
    ///
    /// If `root` has already been discovered, the method returns
    /// immediately without invoking the callback.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function.
    /// * `pl`: a progress logger.
    fn visit_from_node<B, C: FnMut(E) -> ControlFlow<B, ()>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>;

    /// Visits the graph from each of the specified roots, in order.
    ///
    /// See [`visit_from_node`](Sequential::visit_from_node) for more details.
    fn visit<R: IntoIterator<Item = usize>, B, C: FnMut(E) -> ControlFlow<B, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        for root in roots {
            self.visit_from_node(root, &mut callback, pl)?;
        }
        Continue(())
    }

    /// Visits the whole graph, using nodes in increasing order as roots.
    ///
    /// See [`visit_from_node`](Sequential::visit_from_node) for more details.
    fn visit_all<B, C: FnMut(E) -> ControlFlow<B, ()>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
