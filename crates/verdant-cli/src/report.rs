//! Plain-text rendering of a generation for the terminal.

use std::fmt::Write as _;

use verdant_biome::Biome;
use verdant_grid::{ClassifiedGrid, ResourceStats};
use verdant_noise::Channel;

const UNMATCHED: char = '.';

/// Light to dense, for channel values from 0.0 to 1.0.
const SHADES: &[u8] = b" .:-=+*#%@";

/// Map symbol for a biome: the first letter of its name.
fn symbol(biome: &Biome) -> char {
    biome.name().chars().next().unwrap_or('?')
}

/// One line per grid row, one character per cell.
pub fn render_map(grid: &ClassifiedGrid) -> String {
    let catalog = grid.catalog();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        for cell in row {
            out.push(cell.biome.map_or(UNMATCHED, |id| symbol(catalog.get(id))));
        }
        out.push('\n');
    }
    out
}

fn shade(value: f64) -> char {
    let top = SHADES.len() - 1;
    let level = (value.clamp(0.0, 1.0) * SHADES.len() as f64) as usize;
    char::from(SHADES[level.min(top)])
}

/// Raw values of one channel as a shaded character map, one line per row.
pub fn render_channel(grid: &ClassifiedGrid, channel: Channel) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        for cell in row {
            out.push(shade(cell.sample.get(channel)));
        }
        out.push('\n');
    }
    out
}

/// Symbol, name, resource and color of every catalog biome.
pub fn render_legend(grid: &ClassifiedGrid) -> String {
    let mut out = String::new();
    for (_, biome) in grid.catalog().iter() {
        let color = biome.color();
        let _ = writeln!(
            out,
            "  {}  {:<20} {} ({})  #{:02x}{:02x}{:02x}",
            symbol(biome),
            biome.name(),
            biome.resource_type(),
            biome.resource_variant(),
            color.r,
            color.g,
            color.b,
        );
    }
    let _ = writeln!(out, "  {UNMATCHED}  unmatched");
    out
}

pub fn render_stats(stats: &ResourceStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<16} {:>6} {:>8}", "resource", "cells", "share");
    for (resource_type, share) in stats.iter() {
        let _ = writeln!(
            out,
            "  {:<16} {:>6} {:>7.1}%",
            resource_type, share.count, share.percentage
        );
    }
    let _ = writeln!(
        out,
        "  matched {}/{} cells, {} unmatched",
        stats.matched_cells(),
        stats.total_cells(),
        stats.unmatched_cells()
    );
    out
}

/// Tooltip-style details for one cell, or `None` outside the grid.
pub fn describe_cell(grid: &ClassifiedGrid, x: usize, y: usize) -> Option<String> {
    let cell = grid.cell(x, y)?;
    let mut out = String::new();
    match grid.biome_at(x, y) {
        Some(biome) => {
            let _ = writeln!(out, "cell ({x}, {y}): {} [score {}]", biome.name(), cell.score);
            let _ = writeln!(
                out,
                "  resource: {} ({})",
                biome.resource_type(),
                biome.resource_variant()
            );
        }
        None => {
            let _ = writeln!(out, "cell ({x}, {y}): unmatched [best score {}]", cell.score);
        }
    }
    let s = cell.sample;
    let _ = writeln!(
        out,
        "  height {:.3}  humidity {:.3}  temperature {:.3}  mystical {:.3}",
        s.height, s.humidity, s.temperature, s.mystical
    );
    Some(out)
}
