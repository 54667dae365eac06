//! Parse command (GUID text to canonical form and byte layout).

use anyhow::Result;
use clap::Args;
use etw_guid::Guid;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Parse command.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// GUIDs in 8-4-4-4-12 form.
    #[arg(required = true)]
    guids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
pub(crate) struct GuidRow {
    #[tabled(rename = "GUID")]
    pub guid: String,

    #[tabled(rename = "Braced")]
    pub braced: String,

    #[tabled(rename = "Bytes")]
    pub bytes: String,
}

impl From<Guid> for GuidRow {
    fn from(guid: Guid) -> Self {
        Self {
            guid: guid.to_canonical_string(),
            braced: guid.to_braced_string(),
            bytes: hex::encode(guid.as_bytes()),
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = parse_all(&self.guids)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn parse_all(inputs: &[String]) -> Result<Vec<GuidRow>, CliError> {
    inputs
        .iter()
        .map(|input| {
            let guid = Guid::from_canonical_string(input).map_err(|source| {
                CliError::InvalidGuid {
                    input: input.clone(),
                    source,
                }
            })?;
            debug!(input = %input, guid = %guid, "parsed");
            Ok(GuidRow::from(guid))
        })
        .collect()
}
