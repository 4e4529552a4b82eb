//! `scrape-components`: scrape every configured source and write
//! `components.json`.

use clap::Parser;
use component_scraper::aggregate::aggregate;
use component_scraper::cli::{LoaderKind, ScrapeCli};
use component_scraper::outputs::json;
use component_scraper::scrapers::{
    HttpLoader, PageLoader, SourceSpec, WebDriverLoader, scrape_and_close, select_sources,
};
use component_scraper::utils::{ensure_parent_writable, init_tracing};
use std::error::Error;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let start_time = std::time::Instant::now();
    info!("scrape-components starting up");

    let args = ScrapeCli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Early check: the output location must be writable before we spend
    // time in the browser.
    if let Err(e) = ensure_parent_writable(&args.output).await {
        error!(
            path = %args.output.display(),
            error = %e,
            "Output location is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let sources = match select_sources(&args.sources) {
        Ok(s) => s,
        Err(unknown) => {
            error!(source = %unknown, "Unknown source; known sources are: mui, framework7");
            return Err(format!("unknown source `{unknown}`").into());
        }
    };

    match args.loader {
        LoaderKind::Webdriver => {
            let loader = match WebDriverLoader::connect(
                &args.webdriver_url,
                !args.headed,
                &args.user_agent,
            )
            .await
            {
                Ok(l) => l,
                Err(e) => {
                    error!(
                        webdriver_url = %args.webdriver_url,
                        error = %e,
                        "Could not start a browser session; is chromedriver running? (or use --loader http)"
                    );
                    return Err(e.into());
                }
            };
            run(loader, &sources, &args).await?;
        }
        LoaderKind::Http => {
            run(HttpLoader::new(&args.user_agent)?, &sources, &args).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Scrape, aggregate and write.
async fn run<L: PageLoader>(
    loader: L,
    sources: &[SourceSpec],
    args: &ScrapeCli,
) -> Result<(), Box<dyn Error>> {
    let batches = scrape_and_close(loader, sources, args.timeout()).await;

    let doc = aggregate(batches);
    json::write_document(&doc, &args.output).await?;

    println!("\nScraping complete!");
    println!("Total components found: {}", doc.total_components);
    for (source, count) in &doc.sources {
        println!("- {source}: {count}");
    }
    println!("\nOutput saved to: {}", args.output.display());
    Ok(())
}
