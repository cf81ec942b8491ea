/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::RandomAccessGraph;

/// An immutable adjacency structure in compressed sparse row format.
///
/// The successors of node `x` are `targets[offsets[x]..offsets[x + 1]]`.
/// Construction is a stable counting sort on the source of each arc, so the
/// successors of a node appear in the order in which the corresponding arcs
/// were given, and parallel arcs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csr {
    offsets: Box<[usize]>,
    targets: Box<[usize]>,
}

impl Default for Csr {
    fn default() -> Self {
        Self::from_arcs(0, std::iter::empty::<(usize, usize)>())
    }
}

impl Csr {
    /// Builds a graph with `num_nodes` nodes from a list of arcs.
    ///
    /// The iterator is traversed twice, once to count outdegrees and once to
    /// place targets.
    ///
    /// # Panics
    ///
    /// Panics if an arc has an endpoint not smaller than `num_nodes`.
    pub fn from_arcs<I>(num_nodes: usize, arcs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
        I::IntoIter: Clone,
    {
        let arcs = arcs.into_iter();
        let mut offsets = vec![0; num_nodes + 1];
        for (src, _) in arcs.clone() {
            offsets[src + 1] += 1;
        }
        for node in 0..num_nodes {
            offsets[node + 1] += offsets[node];
        }

        let mut next = offsets[..num_nodes].to_vec();
        let mut targets = vec![0; offsets[num_nodes]];
        for (src, dst) in arcs {
            assert!(dst < num_nodes, "Arc target {} >= {}", dst, num_nodes);
            targets[next[src]] = dst;
            next[src] += 1;
        }

        Self {
            offsets: offsets.into_boxed_slice(),
            targets: targets.into_boxed_slice(),
        }
    }
}

impl RandomAccessGraph for Csr {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.targets.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_arcs() {
        let arcs = [(2, 0), (0, 1), (2, 1), (0, 1), (1, 1)];
        let graph = Csr::from_arcs(4, arcs);

        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_arcs(), 5);
        assert_eq!(graph.successors(0), &[1, 1]);
        assert_eq!(graph.successors(1), &[1]);
        assert_eq!(graph.successors(2), &[0, 1]);
        assert!(graph.successors(3).is_empty());
        assert_eq!(graph.outdegree(2), 2);
    }

    #[test]
    fn test_empty() {
        let graph = Csr::default();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_arcs(), 0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        Csr::from_arcs(2, [(0, 2)]);
    }
}
