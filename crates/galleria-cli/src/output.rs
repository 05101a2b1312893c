use std::collections::HashSet;
use std::io::Write;

use galleria_artic::{Artwork, ArtworkId};
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

const TITLE_WIDTH: usize = 44;
const ARTIST_WIDTH: usize = 30;

/// Print one listing page with selection markers.
#[allow(clippy::too_many_arguments)]
pub fn print_page(
    w: &mut dyn Write,
    page: u32,
    page_size: u32,
    rows: &[Artwork],
    total: u64,
    selected: &HashSet<ArtworkId>,
    selected_total: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let total_pages = total.div_ceil(u64::from(page_size)).max(1);
    let header = format!(
        "Page {} of {} ({} artworks, {} selected)",
        page, total_pages, total, selected_total
    );
    if color.enabled() {
        writeln!(w, "{}", header.bold())?;
    } else {
        writeln!(w, "{}", header)?;
    }

    for artwork in rows {
        let marker = if selected.contains(&artwork.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let line = format!(
            "{} {:>8}  {}  {} ({}{})",
            marker,
            artwork.id,
            pad(&artwork.title, TITLE_WIDTH),
            pad(&artwork.artist_display, ARTIST_WIDTH),
            artwork.place_of_origin,
            date_range(artwork),
        );
        if color.enabled() && selected.contains(&artwork.id) {
            writeln!(w, "{}", line.cyan())?;
        } else {
            writeln!(w, "{}", line)?;
        }
    }

    if rows.is_empty() {
        writeln!(w, "(no artworks on this page)")?;
    }
    Ok(())
}

/// Print the full selection as a sorted id list.
pub fn print_selected(
    w: &mut dyn Write,
    selected: &HashSet<ArtworkId>,
    color: ColorMode,
) -> std::io::Result<()> {
    let mut ids: Vec<ArtworkId> = selected.iter().copied().collect();
    ids.sort_unstable();

    let header = format!("{} artworks selected", ids.len());
    if color.enabled() {
        writeln!(w, "{}", header.bold())?;
    } else {
        writeln!(w, "{}", header)?;
    }
    for chunk in ids.chunks(10) {
        let line: Vec<String> = chunk.iter().map(|id| id.to_string()).collect();
        writeln!(w, "  {}", line.join(" "))?;
    }
    Ok(())
}

fn date_range(artwork: &Artwork) -> String {
    match (artwork.date_start, artwork.date_end) {
        (0, 0) => String::new(),
        (start, end) if start == end => format!(", {}", start),
        (start, end) => format!(", {}-{}", start, end),
    }
}

/// Pad or truncate to a fixed display width.
fn pad(s: &str, width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > width {
        let truncated: String = chars[..width.saturating_sub(3)].iter().collect();
        format!("{}...", truncated)
    } else {
        format!("{:<width$}", s)
    }
}
