// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::Route;
use crate::PathGraph;

#[derive(Debug, Clone, Copy)]
struct QueueItem {
    at: i64,
    cost: f64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // NOTE: We revert the order of comparison,
        // as lower costs (and then lower ids) are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.at.cmp(&self.at))
    }
}

/// Outcome of a single [shortest_path] search.
pub(super) struct Search {
    pub route: Option<Route>,
    pub expanded: usize,
}

fn reconstruct_path(came_from: &HashMap<i64, i64>, mut last: i64) -> Vec<i64> {
    let mut path = vec![last];

    while let Some(&nd) = came_from.get(&last) {
        path.push(nd);
        last = nd;
    }

    path.reverse();
    path
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the shortest route between two nodes of the graph.
///
/// Nodes are expanded in order of (tentative distance, id), and neighbors are relaxed
/// in ascending id order. A node's predecessor is only replaced by a strictly
/// shorter alternative, so among equally short routes the first discovered one wins.
///
/// The search stops as soon as `to_id` is finalized, or when every node reachable
/// from `from_id` was expanded.
pub(super) fn shortest_path(g: &PathGraph, from_id: i64, to_id: i64) -> Search {
    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut came_from: HashMap<i64, i64> = HashMap::default();
    let mut known_costs: HashMap<i64, f64> = HashMap::default();
    let mut finalized: HashSet<i64> = HashSet::default();

    queue.push(QueueItem {
        at: from_id,
        cost: 0.0,
    });
    known_costs.insert(from_id, 0.0);

    while let Some(item) = queue.pop() {
        if item.at == to_id {
            return Search {
                route: Some(Route {
                    path: reconstruct_path(&came_from, to_id),
                    total_distance: item.cost,
                }),
                expanded: finalized.len(),
            };
        }

        // Stale entries remain in the queue after a node's cost was improved.
        if !finalized.insert(item.at) {
            continue;
        }

        for &(neighbor_id, distance) in g.neighbors(item.at) {
            if finalized.contains(&neighbor_id) {
                continue;
            }

            // A missing entry means the neighbor was not reached yet;
            // the sum itself may have overflowed to infinity.
            let neighbor_cost = item.cost + distance;
            if let Some(&known_cost) = known_costs.get(&neighbor_id) {
                if neighbor_cost >= known_cost {
                    continue;
                }
            }

            came_from.insert(neighbor_id, item.at);
            known_costs.insert(neighbor_id, neighbor_cost);
            queue.push(QueueItem {
                at: neighbor_id,
                cost: neighbor_cost,
            });
        }
    }

    Search {
        route: None,
        expanded: finalized.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::CampusBuilder;
    use crate::{Edge, Location};

    #[test]
    fn queue_pops_lowest_cost_then_lowest_id() {
        let mut queue = BinaryHeap::from(vec![
            QueueItem { at: 3, cost: 1.0 },
            QueueItem { at: 1, cost: 2.0 },
            QueueItem { at: 2, cost: 1.0 },
            QueueItem { at: 4, cost: 0.5 },
        ]);

        let order: Vec<i64> = std::iter::from_fn(|| queue.pop().map(|i| i.at)).collect();
        assert_eq!(order, vec![4, 2, 3, 1]);
    }

    #[test]
    fn reaches_nodes_past_overflowing_distances() {
        let mut b = CampusBuilder::default();
        b.add_location(Location::new(1, "A", 0.0, 0.0));
        b.add_location(Location::new(2, "B", 1.0, 0.0));
        b.add_location(Location::new(3, "C", 2.0, 0.0));
        b.add_edge(Edge::new(1, 2, 1e308));
        b.add_edge(Edge::new(2, 3, 1e308));
        let campus = b.build().unwrap();

        let search = shortest_path(campus.graph(), 1, 3);
        let route = search.route.expect("C is connected to A");
        assert_eq!(route.path, vec![1, 2, 3]);
        assert!(route.total_distance.is_infinite());
    }

    #[test]
    fn reconstructs_path_from_predecessors() {
        let came_from = HashMap::from([(4, 2), (2, 1), (3, 1)]);
        assert_eq!(reconstruct_path(&came_from, 4), vec![1, 2, 4]);
        assert_eq!(reconstruct_path(&came_from, 1), vec![1]);
    }
}
