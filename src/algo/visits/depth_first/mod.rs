/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument [`Event`].
//! The callback is called at the [start of a visit](Event::Init), [every time
//! a new node is discovered](Event::Previsit), if supported [every time all
//! the nodes reachable from a node have been
//! visited](Event::Postvisit), and at the [end of a visit](Event::Done).

mod post_order;
pub use post_order::*;

mod flood;
pub use flood::*;

/// Types of callback events generated during a depth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// Initialization: the visit from `root` is about to start.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time.
    Previsit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
    },
    /// All the nodes reachable from the node have been discovered and, in
    /// turn, completed: the node is finished.
    ///
    /// Only [`SeqPostOrder`] generates this event.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}
