//! Shared output formatting for batch reports.
//!
//! Provides JSON and plain-text formatters for `BatchReport`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::report::{BatchReport, PostResult};

/// Format a `BatchReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &BatchReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `BatchReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &BatchReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  LINKPOST QUALITY CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Posts checked:  {}", report.checked_count())?;
    writeln!(writer, "  Posts failing:  {}", report.failed_count())?;
    writeln!(writer)?;

    for post in &report.posts {
        write_post(post, writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} post(s) passed every check",
            report.checked_count()
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} post(s) need another pass",
            report.failed_count()
        )?;
        write_hints(report, writer)?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

fn write_post(post: &PostResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    let mark = |ok: bool| if ok { "\u{2713}" } else { "\u{2717}" };
    let r = &post.report;

    writeln!(writer, "{}", "-".repeat(80))?;
    writeln!(writer, "  {}", post.source)?;
    writeln!(writer, "{}", "-".repeat(80))?;
    writeln!(
        writer,
        "  {} length          {}/{} chars",
        mark(r.within_length_limit),
        post.char_count,
        post.max_length
    )?;
    let cta_detail = post
        .matched_call_to_action
        .as_ref()
        .map_or_else(String::new, |pattern| format!("  matched /{pattern}/"));
    writeln!(
        writer,
        "  {} call to action{cta_detail}",
        mark(r.has_call_to_action)
    )?;
    writeln!(writer, "  {} emoji", mark(r.has_emoji))?;
    writeln!(writer, "  {} engagement", mark(r.is_engaging))?;
    writeln!(writer)?;
    Ok(())
}

fn write_hints(report: &BatchReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let any_failed = |check: &'static str| {
        report
            .posts
            .iter()
            .any(|p| p.report.failed_checks().contains(&check))
    };

    writeln!(writer)?;
    writeln!(writer, "  To improve:")?;
    if any_failed("length") {
        writeln!(writer, "    - Trim the post so it fits before \"see more\"")?;
    }
    if any_failed("call_to_action") {
        writeln!(
            writer,
            "    - End with a question or invite readers to share their experience"
        )?;
    }
    if any_failed("emoji") {
        writeln!(writer, "    - Add one or two relevant emojis")?;
    }
    if any_failed("engagement") {
        writeln!(
            writer,
            "    - Lead with an insight, a tip or a lesson learned"
        )?;
    }
    Ok(())
}
