use crate::domain::model::{InspectionSkipReason, LineSkipReason};
use crate::usecase::stats::RunStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    RecordSkipped {
        line: usize,
        reason: LineSkipReason,
    },

    EdgeDropped {
        line: usize,
        from: i64,
        to: i64,
    },

    GraphBuilt {
        nodes: usize,
        edges: usize,
    },

    InspectionSkipped {
        id: i64,
        reason: InspectionSkipReason,
    },

    SectorDiscovered {
        start: usize,
        size: usize,
    },

    Finished {
        stats: RunStats,
    },
}
