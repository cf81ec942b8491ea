/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Csr, RandomAccessGraph};
use dsi_progress_logger::ProgressLog;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can happen while loading an edge list.
///
/// Malformed lines are not errors: they are skipped and counted (see
/// [`EdgeListGraph::skipped_lines`]).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not open edge list {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read line {line} of the edge list")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// A directed graph built from a list of arcs between integer labels.
///
/// Labels need not be contiguous, zero-based or positive. Each label is
/// assigned a node index in order of first appearance, the source of an arc
/// being registered before its target. Only labels appearing as an endpoint
/// of some arc become nodes.
///
/// The graph is immutable after construction and exposes both directions:
/// [`forward`](EdgeListGraph::forward) and
/// [`transpose`](EdgeListGraph::transpose). An arc `(x, y)` contributes
/// exactly one successor `y` to `x` in the former and exactly one successor
/// `x` to `y` in the latter.
///
/// # Examples
///
/// ```
/// use scc_finder::prelude::*;
///
/// let graph = EdgeListGraph::from_arcs([(10, 20), (20, 10), (20, 30)]);
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.label(2), 30);
/// assert_eq!(graph.node(20), Some(1));
/// assert_eq!(graph.forward().successors(1), &[0, 2]);
/// assert_eq!(graph.transpose().successors(0), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListGraph {
    labels: Box<[i64]>,
    nodes: HashMap<i64, usize>,
    forward: Csr,
    transpose: Csr,
    skipped_lines: usize,
}

#[derive(Debug, Default)]
struct Builder {
    labels: Vec<i64>,
    nodes: HashMap<i64, usize>,
    arcs: Vec<(usize, usize)>,
    skipped_lines: usize,
}

impl Builder {
    fn node(&mut self, label: i64) -> usize {
        let labels = &mut self.labels;
        *self.nodes.entry(label).or_insert_with(|| {
            labels.push(label);
            labels.len() - 1
        })
    }

    fn add_arc(&mut self, src: i64, dst: i64) {
        let src = self.node(src);
        let dst = self.node(dst);
        self.arcs.push((src, dst));
    }

    fn build(self) -> EdgeListGraph {
        let num_nodes = self.labels.len();
        let forward = Csr::from_arcs(num_nodes, self.arcs.iter().copied());
        let transpose = Csr::from_arcs(
            num_nodes,
            self.arcs.iter().map(|&(src, dst)| (dst, src)),
        );
        EdgeListGraph {
            labels: self.labels.into_boxed_slice(),
            nodes: self.nodes,
            forward,
            transpose,
            skipped_lines: self.skipped_lines,
        }
    }
}

/// Parses the first two whitespace-separated tokens of a line as the
/// source and target labels of an arc. Further tokens are ignored.
pub(crate) fn parse_arc(line: &str) -> Option<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let src = tokens.next()?.parse().ok()?;
    let dst = tokens.next()?.parse().ok()?;
    Some((src, dst))
}

impl EdgeListGraph {
    /// Builds a graph from a list of arcs given as label pairs.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let mut builder = Builder::default();
        for (src, dst) in arcs {
            builder.add_arc(src, dst);
        }
        builder.build()
    }

    /// Loads a graph from a reader returning one arc per line.
    ///
    /// Each line must contain two whitespace-separated integers, the source
    /// and the target of the arc. Blank lines are ignored; lines that do not
    /// start with two integers, or that are not valid UTF-8, are skipped.
    ///
    /// # Arguments
    /// * `reader`: the source of the edge list.
    /// * `pl`: a progress logger, updated once per line.
    pub fn from_reader(
        mut reader: impl BufRead,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, LoadError> {
        pl.item_name("line");
        pl.expected_updates(None);
        pl.start("Loading edge list...");

        let mut builder = Builder::default();
        let mut buf = Vec::with_capacity(64);
        let mut line = 0;

        loop {
            buf.clear();
            line += 1;
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::Read { line, source })?;
            if read == 0 {
                break;
            }

            match std::str::from_utf8(&buf) {
                Ok(text) if text.trim().is_empty() => {}
                Ok(text) => match parse_arc(text) {
                    Some((src, dst)) => builder.add_arc(src, dst),
                    None => {
                        log::debug!(
                            "Skipping malformed line {}: {:?}",
                            line,
                            text.trim_end()
                        );
                        builder.skipped_lines += 1;
                    }
                },
                Err(_) => {
                    log::debug!("Skipping line {}: not valid UTF-8", line);
                    builder.skipped_lines += 1;
                }
            }
            pl.light_update();
        }

        pl.done();

        let graph = builder.build();
        if graph.skipped_lines > 0 {
            log::warn!("Skipped {} malformed lines", graph.skipped_lines);
        }
        log::info!(
            "Loaded {} nodes and {} arcs",
            graph.num_nodes(),
            graph.num_arcs()
        );
        Ok(graph)
    }

    /// Loads a graph from the edge list stored in a file.
    ///
    /// See [`from_reader`](EdgeListGraph::from_reader) for the format.
    pub fn from_path(
        path: impl AsRef<Path>,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), pl)
    }

    /// Returns the number of nodes, that is, of distinct labels.
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of arcs, parallel arcs included.
    pub fn num_arcs(&self) -> usize {
        self.forward.num_arcs()
    }

    /// Returns the number of input lines that were skipped as malformed.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than [`num_nodes`](Self::num_nodes).
    pub fn label(&self, node: usize) -> i64 {
        self.labels[node]
    }

    /// Returns the labels of all nodes, indexed by node.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Returns the node with the given label, if the label appeared in
    /// some arc.
    pub fn node(&self, label: i64) -> Option<usize> {
        self.nodes.get(&label).copied()
    }

    /// Returns the graph with arcs in their original direction.
    pub fn forward(&self) -> &Csr {
        &self.forward
    }

    /// Returns the graph with every arc reversed.
    pub fn transpose(&self) -> &Csr {
        &self.transpose
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_arc() {
        assert_eq!(parse_arc("1 2"), Some((1, 2)));
        assert_eq!(parse_arc("  7\t-3  \r\n"), Some((7, -3)));
        assert_eq!(parse_arc("0 0 42"), Some((0, 0)));
        assert_eq!(parse_arc("1"), None);
        assert_eq!(parse_arc(""), None);
        assert_eq!(parse_arc("1 two"), None);
        assert_eq!(parse_arc("one 2"), None);
        assert_eq!(parse_arc("1.5 2"), None);
        assert_eq!(parse_arc("99999999999999999999 1"), None);
    }

    #[test]
    fn test_first_appearance_order() {
        let graph = EdgeListGraph::from_arcs([(5, 3), (3, 8), (8, 5), (9, 3)]);
        assert_eq!(graph.labels(), &[5, 3, 8, 9]);
        assert_eq!(graph.node(9), Some(3));
        assert_eq!(graph.node(4), None);
    }
}
