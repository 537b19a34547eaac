use crate::export::export_report_csv;
use arranger::{ArrangeSummary, Direction, Item, ItemKind, Result as ArrangeResult};
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::{
    path::PathBuf,
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
};

/// Node-type counts of a page, for reporting only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub top_level: usize,
    pub containers: usize,
    pub plain: usize,
    /// Items below the top level, at any depth
    pub nested: usize,
}

impl Census {
    pub fn of(root: &[Item]) -> Self {
        let mut census = Census {
            top_level: root.len(),
            ..Default::default()
        };

        let mut stack: Vec<&Item> = root.iter().collect();
        while let Some(item) = stack.pop() {
            match item.kind {
                ItemKind::Container => census.containers += 1,
                ItemKind::Plain => census.plain += 1,
            }
            census.nested += item.children.len();
            stack.extend(item.children.iter());
        }
        census
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub timestamp: DateTime<Local>,
    pub command: String,
    pub direction: Option<Direction>,
    pub outcome: Outcome,
    pub moves: usize,
    pub detail: String,
    pub census: Census,
}

impl RunReport {
    pub fn new(command: &str, result: &ArrangeResult<ArrangeSummary>, census: Census) -> Self {
        let (direction, outcome, moves, detail) = match result {
            Ok(summary) => (
                Some(summary.direction),
                Outcome::Success,
                summary.moves,
                String::new(),
            ),
            Err(e) => (
                arranger::select_direction(command).ok(),
                Outcome::Failure,
                0,
                e.to_string(),
            ),
        };

        Self {
            timestamp: Local::now(),
            command: command.to_string(),
            direction,
            outcome,
            moves,
            detail,
            census,
        }
    }
}

/// Fire-and-forget report backup task.
///
/// Reports travel over a channel to a background thread that backs them up to
/// disk. Nothing here can fail or delay an arrangement.
pub struct Reporter {
    sender: Option<Sender<RunReport>>,
    handle: Option<JoinHandle<()>>,
}

impl Reporter {
    pub fn spawn(output_dir: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel::<RunReport>();

        let spawned = thread::Builder::new()
            .name("report-backup".into())
            .spawn(move || {
                for report in receiver {
                    match export_report_csv(&report, &output_dir) {
                        Ok(path) => debug!("Report saved to: {}", path.display()),
                        Err(e) => warn!("Failed to back up run report: {e}"),
                    }
                }
            });

        match spawned {
            Ok(handle) => Self {
                sender: Some(sender),
                handle: Some(handle),
            },
            Err(e) => {
                warn!("Reporting disabled, could not start backup task: {e}");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            sender: None,
            handle: None,
        }
    }

    /// Queues a report. Silently dropped when reporting is off or the task is gone.
    pub fn submit(&self, report: RunReport) {
        if let Some(sender) = &self.sender
            && sender.send(report).is_err()
        {
            debug!("Report task is gone, dropping report");
        }
    }

    /// Closes the channel and waits for queued reports to be written
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("Report task panicked");
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
