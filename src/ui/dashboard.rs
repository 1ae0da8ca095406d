use std::path::Path;

use colored::Colorize;
use eyre::Result;

use crate::export;
use crate::models::result::OptimizationResult;
use crate::ui::{gauge, prompt_line};

const KEYWORD_CHIP_LIMIT: usize = 5;
const CHANGE_GROUP_LIMIT: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub enum DashboardAction {
    NewOptimization,
    Quit,
}

/// Interactive results view. All rendering reads the result through a
/// shared reference; nothing here mutates it.
pub fn run(result: &OptimizationResult, output: &Path) -> Result<DashboardAction> {
    println!();
    println!("{}", render_scores(result));
    println!("{}", render_report(result));
    println!("{}", render_change_groups(result));

    loop {
        println!();
        println!(
            "  {}   {}   {}   {}   {}   {}",
            "[v] visual preview".cyan(),
            "[l] LaTeX source".cyan(),
            "[t] save .tex".cyan(),
            "[p] download PDF".cyan(),
            "[n] new optimization".cyan(),
            "[q] quit".cyan()
        );

        let choice = prompt_line(&format!("{}", "  > ".cyan()))?;
        match choice.to_lowercase().as_str() {
            "v" => println!("\n{}", render_visual_preview(result)),
            "l" => println!("\n{}", result.latex_code),
            "t" => match export::save_latex(output, &result.latex_code) {
                Ok(()) => println!(
                    "  {}",
                    format!("Saved LaTeX source to {}", output.display()).green()
                ),
                Err(e) => println!("  {}", format!("Could not save: {e}").red()),
            },
            "p" => println!("  {}", export::PDF_STUB_MESSAGE.yellow()),
            "n" => return Ok(DashboardAction::NewOptimization),
            "q" => return Ok(DashboardAction::Quit),
            _ => println!("  {}", "Please choose one of the listed options.".red()),
        }
    }
}

pub fn render_scores(result: &OptimizationResult) -> String {
    format!(
        "  {}\n    {}   {}\n    {}  {}",
        "ATS Score Improvement".white().bold(),
        "Original ".bright_black(),
        result.original_score.to_string().bold(),
        "Optimized".bright_black(),
        gauge::render(result.optimized_score)
    )
}

pub fn render_report(result: &OptimizationResult) -> String {
    let improvements = &result.improvements;
    let mut out = format!(
        "  {}\n    Keywords Added {}  |  Skills Optimized {}  |  Sections Rewritten {}  |  Metrics Added {}\n",
        "Optimization Report".white().bold(),
        improvements.keywords_added.len(),
        improvements.skills_optimized.len(),
        improvements.experience_rewritten.len(),
        improvements.metrics_introduced.len(),
    );

    if !improvements.keywords_added.is_empty() {
        let chips = improvements
            .keywords_added
            .iter()
            .take(KEYWORD_CHIP_LIMIT)
            .map(|kw| format!("+ {kw}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&format!("    {}", chips.green()));

        let rest = improvements.keywords_added.len().saturating_sub(KEYWORD_CHIP_LIMIT);
        if rest > 0 {
            out.push_str(&format!("  {}", format!("+{rest} more").bright_black()));
        }
        out.push('\n');
    }

    out
}

pub fn render_change_groups(result: &OptimizationResult) -> String {
    let improvements = &result.improvements;
    let groups = [
        ("Experience Transformation", &improvements.experience_rewritten),
        ("Impact & Metrics", &improvements.metrics_introduced),
        ("Skill Alignment", &improvements.skills_optimized),
    ];

    let mut out = format!("  {}\n", "Why this wins interviews".white().bold());
    for (title, items) in groups {
        if items.is_empty() {
            continue;
        }

        out.push_str(&format!("    {} {}\n", "✓".green(), title.cyan()));
        for item in items.iter().take(CHANGE_GROUP_LIMIT) {
            out.push_str(&format!("      \"{item}\"\n"));
        }
    }

    out
}

/// Text rendition of the moderncv banking layout, derived purely from
/// the preview document.
pub fn render_visual_preview(result: &OptimizationResult) -> String {
    let data = &result.preview_data;
    let mut out = String::new();

    out.push_str(&format!("  {}\n", data.full_name.to_uppercase().bold()));
    out.push_str(&format!("  {}\n", data.title.bright_black()));

    let contact = [
        data.contact_info.email.as_deref(),
        data.contact_info.phone.as_deref(),
        data.contact_info.location.as_deref(),
        data.contact_info.linkedin.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" • ");
    if !contact.is_empty() {
        out.push_str(&format!("  {contact}\n"));
    }

    out.push('\n');
    out.push_str(&section_header("EXECUTIVE SUMMARY"));
    out.push_str(&format!("  {}\n\n", data.summary));

    out.push_str(&section_header("EXPERIENCE"));
    for job in &data.experience {
        out.push_str(&format!("  {}  —  {}\n", job.role.bold(), job.dates));
        match &job.location {
            Some(location) => out.push_str(&format!("  {} ({location})\n", job.company.blue())),
            None => out.push_str(&format!("  {}\n", job.company.blue())),
        }
        for bullet in &job.bullets {
            out.push_str(&format!("    • {bullet}\n"));
        }
        out.push('\n');
    }

    out.push_str(&section_header("EDUCATION"));
    for entry in &data.education {
        out.push_str(&format!("  {}  —  {}\n", entry.institution.bold(), entry.dates));
        out.push_str(&format!("  {}\n", entry.degree));
    }
    out.push('\n');

    out.push_str(&section_header("SKILLS"));
    for category in &data.skills {
        out.push_str(&format!(
            "  {}: {}\n",
            category.category.bold(),
            category.items.join(", ")
        ));
    }

    out
}

fn section_header(title: &str) -> String {
    format!("  {}\n  {}\n", title.blue().bold(), "─".repeat(58))
}
