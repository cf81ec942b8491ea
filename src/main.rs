/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use scc_finder::prelude::*;

/// Number of component sizes reported when none is specified.
const DEFAULT_TOP_N: usize = 5;

const USAGE: &str = "Usage: scc-finder <EDGE_LIST> [TOP_N]";

/// Parses the edge-list path and the number of component sizes to report.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(String, usize)> {
    let path = args.next().context(USAGE)?;
    let top_n = match args.next() {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("Invalid number of components {:?}. {}", arg, USAGE))?,
        None => DEFAULT_TOP_N,
    };
    Ok((path, top_n))
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let (path, top_n) = parse_args(std::env::args().skip(1))?;

    let mut main_pl = progress_logger![display_memory = true];

    let graph = EdgeListGraph::from_path(&path, &mut main_pl)
        .with_context(|| format!("Could not load graph from {}", path))?;
    main_pl.info(format_args!(
        "Graph has {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    ));

    let sccs = sccs::kosaraju(graph.forward(), graph.transpose(), &mut main_pl);
    println!("{}", SizeList(&sccs.top_sizes(top_n)));

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_default_top_n() -> Result<()> {
        assert_eq!(parse_args(args(&["graph.txt"]))?, ("graph.txt".to_string(), 5));
        Ok(())
    }

    #[test]
    fn test_explicit_top_n() -> Result<()> {
        assert_eq!(parse_args(args(&["graph.txt", "3"]))?, ("graph.txt".to_string(), 3));
        assert_eq!(parse_args(args(&["graph.txt", "0"]))?, ("graph.txt".to_string(), 0));
        Ok(())
    }

    #[test]
    fn test_invalid_args() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["graph.txt", "five"])).is_err());
        assert!(parse_args(args(&["graph.txt", "-1"])).is_err());
    }
}
