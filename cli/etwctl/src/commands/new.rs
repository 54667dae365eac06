//! New command (random GUID generation).

use anyhow::{ensure, Result};
use clap::Args;
use etw_guid::Guid;

use crate::output::print_output;

use super::parse::GuidRow;
use super::CommandContext;

/// Upper bound on GUIDs generated per invocation.
const MAX_COUNT: usize = 10_000;

/// New command.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Number of GUIDs to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,
}

impl NewCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = generate(self.count)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn generate(count: usize) -> Result<Vec<GuidRow>> {
    ensure!(
        (1..=MAX_COUNT).contains(&count),
        "--count must be between 1 and {MAX_COUNT}."
    );

    Ok((0..count).map(|_| GuidRow::from(Guid::random())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_requested_count() {
        let rows = generate(3).unwrap();
        assert_eq!(rows.len(), 3);

        let unique: HashSet<&str> = rows.iter().map(|r| r.guid.as_str()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn rows_are_canonical_and_consistent() {
        let rows = generate(1).unwrap();
        let guid: Guid = rows[0].guid.parse().unwrap();
        assert_eq!(rows[0].guid, guid.to_canonical_string());
        assert_eq!(rows[0].braced, guid.to_braced_string());
        assert_eq!(rows[0].bytes, hex::encode(guid.as_bytes()));
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(generate(1).unwrap().len(), 1);
        assert_eq!(generate(MAX_COUNT).unwrap().len(), MAX_COUNT);
    }

    #[test]
    fn rejects_out_of_range_count() {
        for count in [0, MAX_COUNT + 1] {
            let err = generate(count).unwrap_err();
            assert!(err.to_string().contains("--count"), "count {count}");
        }
    }
}
