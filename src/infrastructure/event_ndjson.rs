use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::RecordSkipped { line, reason } => {
            json!({"type":"record_skipped","line":line,"reason":reason})
        }
        AppEvent::EdgeDropped { line, from, to } => {
            json!({"type":"edge_dropped","line":line,"from":from,"to":to})
        }
        AppEvent::GraphBuilt { nodes, edges } => {
            json!({"type":"graph_built","nodes":nodes,"edges":edges})
        }
        AppEvent::InspectionSkipped { id, reason } => {
            json!({"type":"inspection_skipped","id":id,"reason":reason})
        }
        AppEvent::SectorDiscovered { start, size } => {
            json!({"type":"sector_discovered","start":start,"size":size})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

/// Drains `rx` onto stderr as NDJSON. Stdout is reserved for the answer.
pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);
            eprintln!("{line}");
        }
    })
}
