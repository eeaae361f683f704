/// Highest building ID accepted when no bound is configured.
pub const DEFAULT_MAX_ID: usize = 1000;

/// Largest bound a caller may configure. Storage is one slot per ID, so this caps memory.
pub const MAX_CONFIGURABLE_ID: usize = 1_000_000;

/// Undirected adjacency over the fixed ID domain `[0, max_id]`.
///
/// Every ID in the domain owns a slot, so vertices without edges map to an empty
/// neighbor list. Duplicate edges and self-loops are stored as given.
#[derive(Debug, Clone)]
pub struct BuildingGraph {
    pub edges: Vec<Vec<usize>>,
}

impl BuildingGraph {
    pub fn new(max_id: usize) -> Self {
        Self {
            edges: vec![Vec::new(); max_id + 1],
        }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of stored neighbor entries. Each accepted edge contributes two.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    /// Maps a raw ID onto its slot, or `None` when it lies outside the domain.
    pub fn slot(&self, id: i64) -> Option<usize> {
        usize::try_from(id).ok().filter(|&i| i < self.edges.len())
    }

    /// Adds the undirected edge `a - b`.
    ///
    /// Returns `false` and leaves the graph untouched when either endpoint is out of range.
    pub fn add_edge(&mut self, a: i64, b: i64) -> bool {
        let (Some(a), Some(b)) = (self.slot(a), self.slot(b)) else {
            return false;
        };
        self.edges[a].push(b);
        self.edges[b].push(a);
        true
    }

    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.edges[id]
    }
}

impl Default for BuildingGraph {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ID)
    }
}
