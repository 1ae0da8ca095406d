mod app;
mod export;
mod gateway;
mod ingest;
mod models;
mod ui;
mod utils;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, info};

use crate::app::state::{App, AppStep};
use crate::gateway::agent::CvOptimizer;
use crate::ui::dashboard::DashboardAction;
use crate::utils::cli::Args;
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;

/// The one user-facing failure banner; the specific gateway error kind
/// only goes to the debug log.
const OPTIMIZE_FAILED_MESSAGE: &str =
    "Failed to optimize CV. Please try again. Ensure your file contains readable text.";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting cv-forge {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config.clone())?;
    let api_key = config
        .llm
        .api_key
        .clone()
        .ok_or_else(|| eyre::eyre!("LLM API key not configured in config.toml"))?;

    let optimizer = CvOptimizer::new(
        api_key,
        config.llm.model.clone(),
        config.llm.endpoint.clone(),
    );

    // CLI-supplied inputs prefill the first Upload visit only; retries
    // after a failure prompt interactively.
    let mut cv_prefill = args.cv.clone();
    let mut jd_prefill = args.job_file.clone();

    let mut app = App::new();

    loop {
        match app.step() {
            AppStep::Hero => {
                ui::hero::render();
                if !ui::hero::wait_for_start()? {
                    break;
                }
                app.start();
            }

            AppStep::Upload => {
                let banner = app.error().map(str::to_owned);
                let collected =
                    ui::upload::collect(banner.as_deref(), cv_prefill.take(), jd_prefill.take())
                        .await?;

                match collected {
                    Some(request) => app.submit(request),
                    None => break,
                }
            }

            AppStep::Processing => {
                let request = app
                    .take_pending()
                    .ok_or_else(|| eyre::eyre!("no submission in flight"))?;

                let indicator = ui::processing::spawn_indicator();
                let outcome = optimizer.optimize(&request).await;
                indicator.abort();

                match outcome {
                    Ok(result) => {
                        info!(
                            "optimization complete (ATS score {} -> {})",
                            result.original_score, result.optimized_score
                        );
                        app.complete(result);
                    }
                    Err(e) => {
                        debug!("gateway call failed: {e:?}");
                        app.fail(OPTIMIZE_FAILED_MESSAGE);
                    }
                }
            }

            AppStep::Results => {
                let result = app
                    .result()
                    .ok_or_else(|| eyre::eyre!("results state without a result"))?;

                match ui::dashboard::run(result, &args.output)? {
                    DashboardAction::NewOptimization => app.reset(),
                    DashboardAction::Quit => break,
                }
            }
        }
    }

    info!("goodbye");
    Ok(())
}
