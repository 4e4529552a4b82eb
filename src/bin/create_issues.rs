//! `create-issues`: file one GitHub issue per component in
//! `components.json`.

use clap::Parser;
use component_scraper::cli::IssuesCli;
use component_scraper::issues::{GhCli, file_issues};
use component_scraper::utils::init_tracing;
use std::process::ExitCode;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    info!("create-issues starting up");

    let args = IssuesCli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = args.filer_config();
    let tracker = GhCli::new(args.gh_bin.clone());

    match file_issues(&config, &tracker).await {
        Ok(summary) => {
            if summary.failed > 0 {
                error!(failed = summary.failed, "Some issues could not be created");
            }
            ExitCode::from(summary.exit_code())
        }
        Err(e) => {
            error!(error = %e, "Issue filing aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
