/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.

use std::fmt;

mod kosaraju;
pub use kosaraju::*;

/// The strongly connected components of a graph.
///
/// Each node is assigned the index of its component, and components are
/// numbered from zero. Every node belongs to exactly one component, so the
/// sizes returned by [`compute_sizes`](Sccs::compute_sizes) always add up to
/// the number of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    /// Creates a new set of strongly connected components.
    ///
    /// # Arguments
    /// * `num_components`: the number of components.
    /// * `components`: the component index of each node; every index must be
    ///   smaller than `num_components`.
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < num_components));
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns the component index of each node.
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components, indexed by component.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components];
        for &node_component in self.components.iter() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of the components are
    /// nonincreasing in the component index. The order among components of
    /// the same size is unspecified.
    ///
    /// Returns the new sizes.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_unstable_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        for (new, &old) in sort_perm.iter().enumerate() {
            inv_perm[old] = new;
        }
        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
        sort_perm.into_iter().map(|c| sizes[c]).collect()
    }

    /// Returns the sizes of all components in nonincreasing order.
    pub fn sizes_desc(&self) -> Box<[usize]> {
        let mut sizes = self.compute_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Returns the sizes of the `n` largest components in nonincreasing
    /// order, or of all components if there are fewer than `n`.
    pub fn top_sizes(&self, n: usize) -> Box<[usize]> {
        let mut sizes = self.sizes_desc().into_vec();
        sizes.truncate(n);
        sizes.into_boxed_slice()
    }
}

/// Displays a list of sizes as `[a, b, c]`.
///
/// ```
/// use scc_finder::algo::sccs::SizeList;
///
/// assert_eq!(SizeList(&[434821, 968, 459]).to_string(), "[434821, 968, 459]");
/// assert_eq!(SizeList(&[]).to_string(), "[]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SizeList<'a>(pub &'a [usize]);

impl fmt::Display for SizeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, size) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", size)?;
        }
        f.write_str("]")
    }
}
