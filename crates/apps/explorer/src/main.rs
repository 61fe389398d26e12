mod text_view;

use std::env;
use std::io::{BufRead, Write};

use dataset::{CsvFile, Dataset};
use runtime::Explorer;
use scene::{NavigationEvent, Stage};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::text_view::TextView;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("explorer=info")),
        )
        .init();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var("OBSERVATIONS_CSV").ok())
        .unwrap_or_else(|| "squirrel_cleaned.csv".to_string());

    let source = CsvFile::new(&path);
    let dataset = match Dataset::load_from(&source) {
        Ok(dataset) => dataset,
        Err(e) => {
            // Nothing can render without data; this is a blocking failure.
            error!(%path, error = %e, "failed to load observations");
            std::process::exit(1);
        }
    };
    info!(%path, records = dataset.len(), "observations loaded");

    let mut explorer = Explorer::new(dataset, TextView::new());
    explorer.start();

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        line.clear();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let Some(event) = parse_command(line.trim(), explorer.view()) else {
            if line.trim() == "q" {
                break;
            }
            if line.trim() == "history" {
                for t in explorer.journal().transitions() {
                    println!("  #{} {} -> stage {}", t.sequence, t.event, t.stage.index());
                }
                continue;
            }
            if !line.trim().is_empty() {
                println!("  unrecognized command: {}", line.trim());
            }
            continue;
        };

        if let Err(e) = explorer.handle(&event) {
            warn!(error = %e, "event rejected");
            println!("  {e}");
        }
    }
}

/// Maps one input line to a navigation event against the last rendered frame.
fn parse_command(input: &str, view: &TextView) -> Option<NavigationEvent> {
    match input {
        "n" | "next" => return Some(NavigationEvent::StepForward),
        "b" | "back" | "prev" => return Some(NavigationEvent::StepBackward),
        "h" | "home" => return Some(NavigationEvent::Home),
        _ => {}
    }

    let index: usize = input.parse().ok()?;
    let key = view.choice(index)?.to_string();
    match view.stage() {
        Stage::Overview => Some(NavigationEvent::LocationSelected(key)),
        Stage::ColorBreakdown => Some(NavigationEvent::ColorSelected(key)),
        Stage::ActivityBreakdown => Some(NavigationEvent::ActivitySelected(key)),
        // The deepest stage has no click targets.
        Stage::InteractionBreakdown => None,
    }
}
