//! Console report rendering.
//!
//! The layout is fixed: a per-file block listing each clip, then a
//! fixed-width summary table with one row per file. Both renderers return the
//! text so the CLI decides where it goes and tests can assert on it.

use std::fmt::Write as _;

use crate::classify::classify_purpose;
use crate::summary::FileResult;

const BANNER_WIDTH: usize = 80;
const FILE_COLUMN: usize = 24;
const NAMES_COLUMN: usize = 39;

/// Render the per-file analysis blocks.
pub fn render_report(results: &[FileResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH));
    let _ = writeln!(out, "GLB ANIMATION ANALYSIS RESULTS");
    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));

    for result in results {
        let _ = writeln!(out, "\nFile: {}", result.file_name);
        let _ = writeln!(out, "Path: {}", result.file_path);

        if let Some(error) = &result.error {
            let _ = writeln!(out, "Error: {error}");
            continue;
        }

        let _ = writeln!(out, "Total Animations: {}", result.total_animations);
        if result.total_animations == 0 {
            let _ = writeln!(out, "  No animations found in this file.");
            continue;
        }

        for clip in &result.animations {
            let _ = writeln!(out, "\n  Animation #{}:", clip.index + 1);
            let _ = writeln!(out, "    Name: {}", clip.name);
            match clip.duration {
                Some(d) => {
                    let _ = writeln!(out, "    Duration: {d:.3} seconds");
                }
                None => {
                    let _ = writeln!(out, "    Duration: Unknown");
                }
            }
            let _ = writeln!(out, "    Channels: {}", clip.channel_count);
            let types = if clip.animation_types.is_empty() {
                "None".to_string()
            } else {
                clip.animation_types.join(", ")
            };
            let _ = writeln!(out, "    Animation Types: {types}");
            let _ = writeln!(
                out,
                "    Purpose: {}",
                classify_purpose(&clip.name, clip.duration)
            );
        }
        let _ = writeln!(out, "{}", "-".repeat(60));
    }
    out
}

/// Render the fixed-width summary table, one row per file.
pub fn render_summary_table(results: &[FileResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH));
    let _ = writeln!(out, "SUMMARY TABLE");
    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));
    let _ = writeln!(
        out,
        "{:<25} {:<12} {:<40}",
        "File", "Animations", "Animation Names"
    );
    let _ = writeln!(out, "{}", "-".repeat(BANNER_WIDTH));

    for result in results {
        let file_name = truncate_chars(&result.file_name, FILE_COLUMN);
        let names = if result.error.is_some() {
            "ERROR".to_string()
        } else if result.total_animations == 0 {
            "None".to_string()
        } else {
            let joined = result
                .animations
                .iter()
                .map(|clip| clip.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            ellipsize(&joined, NAMES_COLUMN)
        };
        let _ = writeln!(
            out,
            "{file_name:<25} {:<12} {names:<40}",
            result.total_animations
        );
    }
    out
}

/// Keep at most `max` characters, dropping the rest.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Keep the string intact up to `max` characters; beyond that, cut to
/// `max - 3` and append an ellipsis marker.
fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut cut: String = s.chars().take(max - 3).collect();
        cut.push_str("...");
        cut
    } else {
        s.to_string()
    }
}
