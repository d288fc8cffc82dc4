//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use vegas_ffl::{
    cli::{Commands, FetchArgs, VegasFfl},
    commands::{
        common::FetchParams,
        formats::handle_formats,
        project::{handle_project, ProjectParams},
        show::{handle_show, ShowFilters, ShowParams},
        update::handle_update,
    },
    Result,
};

fn fetch_params(args: FetchArgs) -> FetchParams {
    FetchParams {
        api_key: args.api_key,
        sport: Some(args.sport),
        regions: Some(args.regions),
        markets: args.markets,
        scoring_config: args.scoring_config,
        season_start: args.season_start,
        base_url: args.base_url,
        verbose: args.verbose,
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = VegasFfl::parse();

    match app.command {
        Commands::Update { fetch, cache_file } => {
            handle_update(fetch_params(fetch), cache_file).await?;
        }

        Commands::Project {
            fetch,
            format,
            detailed,
            output,
        } => {
            handle_project(ProjectParams {
                fetch: fetch_params(fetch),
                format,
                detailed,
                output,
            })
            .await?
        }

        Commands::Show {
            cache_file,
            format,
            positions,
            player_name,
            week,
            limit,
            json,
            detailed,
            scoring_config,
        } => handle_show(ShowParams {
            cache_file,
            filters: ShowFilters {
                format,
                positions,
                player_names: player_name,
                week,
                limit,
            },
            as_json: json,
            detailed,
            scoring_config,
        })?,

        Commands::Formats {
            scoring_config,
            json,
        } => handle_formats(scoring_config.as_deref(), json)?,
    }

    Ok(())
}
