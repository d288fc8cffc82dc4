//! Project command: fetch props and print projections directly.

use std::path::PathBuf;

use crate::{core::write_string, Result};

use super::{
    common::{FetchParams, ProjectionContext},
    display::{format_detailed_projection, format_projections_table},
};

/// Parameters for the project command.
#[derive(Debug, Clone, Default)]
pub struct ProjectParams {
    pub fetch: FetchParams,
    pub format: Option<String>,
    pub detailed: bool,
    pub output: Option<PathBuf>,
}

/// Handle the project command
pub async fn handle_project(params: ProjectParams) -> Result<()> {
    let ctx = ProjectionContext::new(
        params.fetch.scoring_config.as_deref(),
        params.fetch.season_start,
    )?;
    // Unknown format names fail before any request is made.
    let formats = ctx.config.select(params.format.as_deref())?;

    let projections = ctx.fetch_projections(&params.fetch, &formats).await?;

    if let Some(path) = &params.output {
        write_string(path, &serde_json::to_string_pretty(&projections)?)?;
        println!("Projections exported to {}", path.display());
    } else if params.detailed {
        for projection in &projections {
            let precision = ctx.config.precision_for(&projection.format);
            println!("{}\n", format_detailed_projection(projection, precision));
        }
    } else {
        println!("{}", format_projections_table(&projections, &ctx.config));
    }

    println!("\nTotal projections generated: {}", projections.len());
    Ok(())
}
