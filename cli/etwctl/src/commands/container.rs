//! Container id command (decode extended data from a record file).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use etw_events::EventRecord;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{print_info, print_output, OutputFormat};
use crate::record_file::RecordFile;

use super::CommandContext;

/// Container id command.
#[derive(Debug, Args)]
pub struct ContainerIdCommand {
    /// JSON record files.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Serialize, Tabled)]
struct ContainerRow {
    #[tabled(rename = "File")]
    file: String,

    #[tabled(rename = "Container ID")]
    #[tabled(display = "display_option")]
    container_id: Option<String>,

    #[tabled(rename = "Provider")]
    provider_id: String,

    #[tabled(rename = "PID")]
    process_id: u32,

    #[tabled(rename = "Timestamp")]
    #[tabled(display = "display_option")]
    timestamp: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("none").to_string()
}

impl ContainerIdCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let mut rows = Vec::with_capacity(self.files.len());

        for path in self.files {
            let record_file = RecordFile::load(&path)?;
            let items = record_file.items();
            let record = record_file.record(&items);
            debug!(path = ?path, items = items.len(), "loaded record");

            rows.push(container_row(path, &record)?);
        }

        if matches!(ctx.format, OutputFormat::Table) && rows.iter().all(|r| r.container_id.is_none())
        {
            print_info("No record carries a container id.");
        }
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn container_row(path: PathBuf, record: &EventRecord<'_>) -> Result<ContainerRow, CliError> {
    let container_id = match record.container_id() {
        Ok(id) => id,
        Err(source) => return Err(CliError::Extraction { path, source }),
    };
    info!(path = ?path, container_id = ?container_id, "container id decoded");

    let header = record.header();
    Ok(ContainerRow {
        file: path.display().to_string(),
        container_id: container_id.map(|id| id.to_string()),
        provider_id: header.provider_id.to_string(),
        process_id: header.process_id,
        timestamp: header.timestamp().map(|ts| ts.to_rfc3339()),
    })
}
