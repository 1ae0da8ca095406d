use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::Result;
use log::debug;

use crate::ingest::UploadedFile;
use crate::models::request::{MIN_JOB_DESCRIPTION_CHARS, OptimizationRequest};
use crate::ui::prompt_line;

/// Gathers a CV and a job description and gates them into a valid
/// `OptimizationRequest`. Returns None when the user quits instead.
///
/// CLI prefills are consumed by the caller on the first visit only;
/// after a failed optimization the view prompts interactively again.
pub async fn collect(
    error: Option<&str>,
    cv_prefill: Option<PathBuf>,
    jd_prefill: Option<PathBuf>,
) -> Result<Option<OptimizationRequest>> {
    println!();
    println!("  {}", "Tell us about the role".white().bold());

    if let Some(message) = error {
        println!();
        println!("  {}", message.red());
    }
    println!();

    let Some(file) = attach_cv(cv_prefill).await? else {
        return Ok(None);
    };

    println!(
        "  {} {} ({}, {:.1} KB)",
        "✓".green(),
        file.name.bold(),
        file.content.kind(),
        file.content.len() as f64 / 1024.0
    );
    println!();

    let mut jd_prefill = jd_prefill;
    let request = loop {
        let jd = match jd_prefill.take() {
            Some(path) => match tokio::fs::read_to_string(&path).await {
                Ok(jd) => {
                    println!(
                        "  job description loaded from {} ({} characters)",
                        path.display(),
                        jd.chars().count()
                    );
                    jd
                }
                Err(e) => {
                    println!(
                        "  {}",
                        format!("Could not read {}: {e}", path.display()).red()
                    );
                    continue;
                }
            },
            None => read_job_description()?,
        };

        let count = jd.chars().count();
        match OptimizationRequest::new(file.clone(), jd) {
            Some(request) => break request,
            None => {
                println!(
                    "  {}",
                    format!(
                        "Job descriptions need more than {MIN_JOB_DESCRIPTION_CHARS} characters \
                         to work with (got {count})."
                    )
                    .red()
                );
                let retry = prompt_line(&format!("{}", "  Try again? (Y/n): ".cyan()))?;
                if retry.eq_ignore_ascii_case("n") {
                    return Ok(None);
                }
            }
        }
    };

    println!();
    println!("  {}", "Optimizing your CV...".cyan());

    Ok(Some(request))
}

async fn attach_cv(prefill: Option<PathBuf>) -> Result<Option<UploadedFile>> {
    if let Some(path) = prefill {
        match UploadedFile::read(&path).await {
            Ok(file) => return Ok(Some(file)),
            Err(e) => {
                debug!("prefilled CV rejected: {e:?}");
                println!(
                    "  {}",
                    format!("Could not read {}: {e}", path.display()).red()
                );
            }
        }
    }

    loop {
        let input = prompt_line(&format!(
            "{}",
            "  Path to your CV (.pdf or .txt, max 5 MB), or 'q' to quit: ".cyan()
        ))?;

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if input.is_empty() {
            continue;
        }

        match UploadedFile::read(Path::new(&input)).await {
            Ok(file) => return Ok(Some(file)),
            Err(e) => println!("  {}", format!("Could not read that file: {e}").red()),
        }
    }
}

fn read_job_description() -> Result<String> {
    println!(
        "{}",
        "  Paste the full job description, then finish with an empty line:".cyan()
    );

    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(lines.join("\n"))
}
