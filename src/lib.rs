/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components of large directed graphs given as edge
//! lists.
//!
//! Graphs are loaded into an [`EdgeListGraph`](graph::EdgeListGraph), which
//! stores both the graph and its transpose; components are computed by
//! [Kosaraju's algorithm](algo::sccs::kosaraju) using iterative visits, so
//! graphs with very long paths do not exhaust the call stack.

pub mod algo;
pub mod graph;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graph::RandomAccessGraph;
}

/// Use `use scc_finder::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::finish_order;
    pub use algo::sccs;
    pub use algo::sccs::{Sccs, SizeList};
    pub use algo::visits::depth_first;
    pub use graph::{Csr, EdgeListGraph, LoadError};
    pub use traits::*;
}
