use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::path::Path as FsPath;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{Location, Path, Point, Segment};
use crate::query::QueryService;

/// On-disk campus description
#[derive(Debug, Deserialize)]
struct CampusData {
    buildings: Vec<Location>,
    paths: Vec<Segment>,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    cost: f64,
}

/// Node in the Dijkstra frontier, ordered so the cheapest pops first
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    cost: f64,
    node: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hashable identity of a coordinate. `-0.0` and `0.0` are the same point.
fn point_key(point: Point) -> (u64, u64) {
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}

/// In-memory campus graph
///
/// Buildings and walkway endpoints are nodes keyed by their coordinates;
/// every walkway is traversable in both directions.
#[derive(Debug)]
pub struct CampusGraph {
    locations: Vec<Location>,
    by_name: HashMap<String, usize>,
    nodes: Vec<Point>,
    node_ids: HashMap<(u64, u64), usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl CampusGraph {
    /// Load a campus graph from a JSON file
    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read campus data from {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid campus data in {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: CampusData =
            serde_json::from_str(json).context("Failed to parse campus data JSON")?;
        Self::new(data.buildings, data.paths)
    }

    pub fn new(buildings: Vec<Location>, walkways: Vec<Segment>) -> Result<Self> {
        let mut graph = CampusGraph {
            locations: Vec::with_capacity(buildings.len()),
            by_name: HashMap::with_capacity(buildings.len()),
            nodes: Vec::new(),
            node_ids: HashMap::new(),
            adjacency: Vec::new(),
        };

        for building in buildings {
            if !building.x.is_finite() || !building.y.is_finite() {
                bail!("Building '{}' has non-finite coordinates", building.short_name);
            }
            if graph.by_name.contains_key(&building.short_name) {
                bail!("Duplicate building short name '{}'", building.short_name);
            }
            graph.node_for(building.point());
            graph
                .by_name
                .insert(building.short_name.clone(), graph.locations.len());
            graph.locations.push(building);
        }

        for (index, walkway) in walkways.iter().enumerate() {
            let finite = [walkway.start.x, walkway.start.y, walkway.end.x, walkway.end.y]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                bail!("Path #{} has non-finite coordinates", index);
            }
            if !walkway.cost.is_finite() || walkway.cost < 0.0 {
                bail!(
                    "Path #{} has invalid cost {}: costs must be finite and non-negative",
                    index,
                    walkway.cost
                );
            }
            let a = graph.node_for(walkway.start);
            let b = graph.node_for(walkway.end);
            graph.adjacency[a].push(Edge {
                to: b,
                cost: walkway.cost,
            });
            graph.adjacency[b].push(Edge {
                to: a,
                cost: walkway.cost,
            });
        }

        tracing::debug!(
            "Built campus graph with {} buildings, {} nodes, {} walkways",
            graph.locations.len(),
            graph.nodes.len(),
            walkways.len()
        );

        Ok(graph)
    }

    fn node_for(&mut self, point: Point) -> usize {
        let key = point_key(point);
        if let Some(&id) = self.node_ids.get(&key) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(point);
        self.adjacency.push(Vec::new());
        self.node_ids.insert(key, id);
        id
    }

    fn location(&self, short_name: &str) -> Option<&Location> {
        self.by_name.get(short_name).map(|&i| &self.locations[i])
    }

    /// Dijkstra from `from` to `to` over the walkway graph
    fn dijkstra(&self, from: usize, to: usize) -> Option<Path> {
        let mut dist = vec![f64::INFINITY; self.nodes.len()];
        let mut prev: Vec<Option<(usize, f64)>> = vec![None; self.nodes.len()];
        let mut frontier = BinaryHeap::new();

        dist[from] = 0.0;
        frontier.push(Candidate {
            cost: 0.0,
            node: from,
        });

        while let Some(Candidate { cost, node }) = frontier.pop() {
            if node == to {
                break;
            }
            if cost > dist[node] {
                continue;
            }
            for edge in &self.adjacency[node] {
                let next = cost + edge.cost;
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    prev[edge.to] = Some((node, edge.cost));
                    frontier.push(Candidate {
                        cost: next,
                        node: edge.to,
                    });
                }
            }
        }

        if !dist[to].is_finite() {
            return None;
        }

        let mut segments = Vec::new();
        let mut current = to;
        while let Some((previous, cost)) = prev[current] {
            segments.push(Segment {
                start: self.nodes[previous],
                end: self.nodes[current],
                cost,
            });
            current = previous;
        }
        segments.reverse();

        Some(Path {
            start: self.nodes[from],
            path: segments,
            cost: dist[to],
        })
    }
}

impl QueryService for CampusGraph {
    fn all_locations(&self) -> Vec<Location> {
        self.locations.clone()
    }

    fn exists(&self, short_name: &str) -> bool {
        self.by_name.contains_key(short_name)
    }

    fn shortest_path(&self, src: &str, dest: &str) -> Option<Path> {
        let from = self.node_ids.get(&point_key(self.location(src)?.point()))?;
        let to = self.node_ids.get(&point_key(self.location(dest)?.point()))?;
        self.dijkstra(*from, *to)
    }
}
