/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Directed graphs loaded from edge lists.
//!
//! An [`EdgeListGraph`] maps the arbitrary integer labels found in the input
//! to dense node indices in `[0..num_nodes)`, and stores both the forward
//! graph and its transpose as [compressed sparse rows](Csr). Algorithms only
//! see the dense indices, through the [`RandomAccessGraph`] trait.

mod csr;
pub use csr::*;

mod edge_list;
pub use edge_list::*;

/// A graph providing random access to the successors of its nodes.
///
/// Nodes are dense indices in `[0..num_nodes())`, and every successor
/// returned by [`successors`](RandomAccessGraph::successors) is a valid node.
pub trait RandomAccessGraph {
    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs, parallel arcs included.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than [`num_nodes`](Self::num_nodes).
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}
