//! The conversion graph: one static edge per official hop, and shortest-path
//! routing over it.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::LazyLock;

use super::edges::{self, HopFn};
use crate::errors::GraphError;
use schema::{EntityFormat, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Part of the mainline chain, one generation forward or back.
    Sequential,
    /// Side storage, regional captures and other non-adjacent hops.
    NonSequential,
}

pub struct Edge {
    pub from: EntityFormat,
    pub to: EntityFormat,
    pub kind: EdgeKind,
    pub hop: HopFn,
}

const fn edge(from: EntityFormat, to: EntityFormat, kind: EdgeKind, hop: HopFn) -> Edge {
    Edge { from, to, kind, hop }
}

use EdgeKind::{NonSequential, Sequential};
use EntityFormat as F;

pub static EDGES: [Edge; 19] = [
    edge(F::PK1, F::PK2, Sequential, edges::pk1_to_pk2),
    edge(F::PK2, F::PK1, Sequential, edges::pk2_to_pk1),
    edge(F::PK1, F::PK7, NonSequential, edges::gameboy_to_pk7),
    edge(F::PK2, F::PK7, NonSequential, edges::gameboy_to_pk7),
    edge(F::PK2, F::SK2, NonSequential, edges::pk2_to_sk2),
    edge(F::SK2, F::PK2, NonSequential, edges::sk2_to_pk2),
    edge(F::PK3, F::PK4, Sequential, edges::pk3_to_pk4),
    edge(F::PK3, F::CK3, NonSequential, edges::pk3_to_ck3),
    edge(F::CK3, F::PK3, NonSequential, edges::gamecube_to_pk3),
    edge(F::PK3, F::XK3, NonSequential, edges::pk3_to_xk3),
    edge(F::XK3, F::PK3, NonSequential, edges::gamecube_to_pk3),
    edge(F::PK4, F::PK5, Sequential, edges::pk4_to_pk5),
    edge(F::PK4, F::BK4, NonSequential, edges::pk4_to_bk4),
    edge(F::BK4, F::PK4, NonSequential, edges::bk4_to_pk4),
    edge(F::PK5, F::PK6, Sequential, edges::pk5_to_pk6),
    edge(F::PK6, F::PK7, Sequential, edges::pk6_to_pk7),
    edge(F::PK7, F::PK8, Sequential, edges::home_to_pk8),
    edge(F::PB7, F::PK8, NonSequential, edges::home_to_pk8),
    edge(F::PB8, F::PB8LUMI, NonSequential, edges::pb8_to_pb8lumi),
];

/// Validated edge table plus hop distances between every pair of formats.
pub struct ConversionGraph {
    edges: &'static [Edge],
    /// `(from, to)` to hop count, for every reachable pair.
    distances: HashMap<(EntityFormat, EntityFormat), usize>,
}

impl ConversionGraph {
    pub fn build(edges: &'static [Edge]) -> Result<Self, GraphError> {
        validate(edges)?;
        let mut distances = HashMap::new();
        for from in EntityFormat::iter() {
            for (to, hops) in reachable_from(edges, from) {
                distances.insert((from, to), hops);
            }
        }
        Ok(Self { edges, distances })
    }

    pub fn edges(&self) -> &'static [Edge] {
        self.edges
    }

    /// Hop count of the shortest route, `None` when unreachable.
    pub fn distance(&self, from: EntityFormat, to: EntityFormat) -> Option<usize> {
        self.distances.get(&(from, to)).copied()
    }

    /// First edge in table order that moves strictly closer to `to`.
    pub fn next_edge(&self, from: EntityFormat, to: EntityFormat) -> Option<&'static Edge> {
        let remaining = self.distance(from, to)?;
        self.edges.iter().find(|edge| {
            edge.from == from && self.distance(edge.to, to).is_some_and(|d| d < remaining)
        })
    }

    /// Longest shortest route in the graph; no conversion takes more hops.
    pub fn diameter(&self) -> usize {
        self.distances.values().copied().max().unwrap_or(0)
    }
}

fn reachable_from(edges: &[Edge], start: EntityFormat) -> HashMap<EntityFormat, usize> {
    let mut hops = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let next = hops[&node] + 1;
        for edge in edges.iter().filter(|e| e.from == node) {
            if !hops.contains_key(&edge.to) {
                hops.insert(edge.to, next);
                queue.push_back(edge.to);
            }
        }
    }
    hops
}

fn validate(edges: &[Edge]) -> Result<(), GraphError> {
    let mut seen = HashSet::new();
    for edge in edges {
        if edge.from == edge.to {
            return Err(GraphError::SelfLoop(edge.from));
        }
        if !seen.insert((edge.from, edge.to)) {
            return Err(GraphError::DuplicateEdge {
                from: edge.from,
                to: edge.to,
            });
        }
    }
    for format in EntityFormat::iter() {
        if let Some(parent) = format.side_parent() {
            if !seen.contains(&(format, parent)) {
                return Err(GraphError::MissingReturn { format, parent });
            }
        }
        if let Some(successor) = format.mainline_successor() {
            if !seen.contains(&(format, successor)) {
                return Err(GraphError::MissingSuccessor { format, successor });
            }
        }
    }
    Ok(())
}

pub static GRAPH: LazyLock<ConversionGraph> = LazyLock::new(|| {
    ConversionGraph::build(&EDGES).unwrap_or_else(|e| panic!("invalid conversion graph: {}", e))
});
