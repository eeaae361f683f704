use crate::domain::graph::{BuildingGraph, DEFAULT_MAX_ID, MAX_CONFIGURABLE_ID};
use crate::domain::model::{BuildingRecord, InspectionInput, InspectionSkipReason};
use crate::domain::traits::SectorCounter;
use crate::infrastructure::text_input::parse_input;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::RunStats;
use anyhow::{anyhow, Result};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    /// Highest valid building ID; the domain is `[0, max_id]`.
    pub max_id: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_id: DEFAULT_MAX_ID,
        }
    }
}

/// Parses `text` and runs the full pipeline over it.
///
/// Returns `Ok(None)` when the document has no usable header; callers print nothing then.
pub async fn solve_text(
    text: &str,
    config: &SolveConfig,
    counter: &dyn SectorCounter,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<Option<RunStats>> {
    emit(&sink, AppEvent::PhaseStarted { name: "parse".into() }).await;
    let parsed = parse_input(text);
    emit(&sink, AppEvent::PhaseFinished { name: "parse".into() }).await;

    let Some(input) = parsed else {
        return Ok(None);
    };

    solve(&input, config, counter, sink).await.map(Some)
}

pub async fn solve(
    input: &InspectionInput,
    config: &SolveConfig,
    counter: &dyn SectorCounter,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<RunStats> {
    if config.max_id > MAX_CONFIGURABLE_ID {
        return Err(anyhow!(
            "max_id {} exceeds the supported ceiling {MAX_CONFIGURABLE_ID}",
            config.max_id
        ));
    }

    let mut stats = RunStats {
        records_parsed: input.records.len(),
        records_declared: usize::try_from(input.declared_records).unwrap_or(0),
        neighbors_missing: input.records.iter().map(missing_neighbors).sum(),
        lines_skipped: input.skipped_lines.len(),
        ..RunStats::default()
    };

    for skipped in input.skipped_lines.iter() {
        emit(
            &sink,
            AppEvent::RecordSkipped {
                line: skipped.line,
                reason: skipped.reason,
            },
        )
        .await;
    }

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = build_graph(&input.records, config.max_id, &sink, &mut stats).await;
    emit(
        &sink,
        AppEvent::GraphBuilt {
            nodes: graph.node_count(),
            edges: graph.edge_count() / 2,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "count_sectors".into(),
        },
    )
    .await;
    let scan = counter.scan_sectors(&graph, &input.inspection);
    for skip in scan.skipped.iter() {
        match skip.reason {
            InspectionSkipReason::OutOfRange => stats.inspections_out_of_range += 1,
            InspectionSkipReason::AlreadyVisited => stats.inspections_already_visited += 1,
        }
        emit(
            &sink,
            AppEvent::InspectionSkipped {
                id: skip.id,
                reason: skip.reason,
            },
        )
        .await;
    }
    for sector in scan.sectors.iter() {
        emit(
            &sink,
            AppEvent::SectorDiscovered {
                start: sector.start,
                size: sector.size,
            },
        )
        .await;
    }
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "count_sectors".into(),
        },
    )
    .await;

    stats.sectors = scan.sector_count();
    stats.drives = scan.drives();

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok(stats)
}

/// Folds building records into an undirected graph over `[0, max_id]`.
///
/// Edges with an out-of-range endpoint are dropped and reported, never treated as errors.
pub async fn build_graph(
    records: &[BuildingRecord],
    max_id: usize,
    sink: &Option<mpsc::Sender<AppEvent>>,
    stats: &mut RunStats,
) -> BuildingGraph {
    let mut graph = BuildingGraph::new(max_id);

    for record in records.iter() {
        for &nb in record.neighbors.iter() {
            if graph.add_edge(record.id, nb) {
                stats.edges_added += 1;
                continue;
            }
            stats.edges_dropped += 1;
            emit(
                sink,
                AppEvent::EdgeDropped {
                    line: record.line,
                    from: record.id,
                    to: nb,
                },
            )
            .await;
        }
    }

    graph
}

fn missing_neighbors(record: &BuildingRecord) -> usize {
    usize::try_from(record.declared_degree)
        .unwrap_or(0)
        .saturating_sub(record.neighbors.len())
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
