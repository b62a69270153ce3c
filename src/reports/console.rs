//! Renders a resolved table matrix as an aligned text table with numbered
//! footnotes for cell side notes.

use crate::Result;
use crate::misc::ColorMode;
use crate::resolve::{NoteKind, TableMatrix};
use core::fmt::{self, Write};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stdout};
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const COLUMN_GAP: usize = 2;
const MIN_CELL_WIDTH: usize = 9;

pub fn generate<W: Write>(matrix: &TableMatrix, color: ColorMode, footer: Option<&str>, writer: &mut W) -> Result<()> {
    ConsoleReporter::new(writer, color).generate_report(matrix, footer)
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    colors: ColorScheme,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    fn new(writer: &'a mut W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            colors: ColorScheme::new(color_mode),
        }
    }

    fn generate_report(&mut self, matrix: &TableMatrix, footer: Option<&str>) -> Result<()> {
        let mut footnotes = Footnotes::default();
        let grid = Grid::new(matrix, &mut footnotes);
        let layout = Layout::new(&grid);

        self.write_column_heads(matrix, &grid, &layout)?;

        for row in &grid.rows {
            if row.is_header {
                self.write_section_row(row)?;
            } else {
                self.write_value_row(row, &layout)?;
            }
        }

        self.write_footnotes(&footnotes)?;

        if let Some(footer) = footer {
            writeln!(self.writer)?;
            self.colors.write_styled_text(self.writer, footer, TextStyle::Dimmed)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_column_heads(&mut self, matrix: &TableMatrix, grid: &Grid, layout: &Layout) -> Result<()> {
        write!(self.writer, "{:width$}", "", width = layout.name_width)?;
        for (index, head) in grid.heads.iter().enumerate() {
            let width = layout.column_widths[index];
            write!(self.writer, "{:width$}", "", width = COLUMN_GAP)?;

            // Disabled columns are dimmed so the eye skips their Unknown cells.
            let style = if matrix.columns[index].disabled {
                TextStyle::Dimmed
            } else {
                TextStyle::Bold
            };
            let text = pad(&truncate(head, width), width);
            self.colors.write_styled_text(self.writer, &text, style)?;
        }
        writeln!(self.writer)?;
        self.colors.write_styled_line(self.writer, "─", layout.total_width, TextStyle::Dimmed)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section_row(&mut self, row: &GridRow) -> Result<()> {
        writeln!(self.writer)?;
        self.colors.write_styled_text(self.writer, &row.name, TextStyle::Bold)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_value_row(&mut self, row: &GridRow, layout: &Layout) -> Result<()> {
        write!(self.writer, "{}", pad(&truncate(&row.name, layout.name_width), layout.name_width))?;
        for (index, cell) in row.cells.iter().enumerate() {
            let width = layout.column_widths[index];
            write!(self.writer, "{:width$}", "", width = COLUMN_GAP)?;

            let text = truncate(cell, width);
            if index + 1 == row.cells.len() {
                write!(self.writer, "{text}")?;
            } else {
                write!(self.writer, "{}", pad(&text, width))?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_footnotes(&mut self, footnotes: &Footnotes) -> Result<()> {
        if footnotes.notes.is_empty() {
            return Ok(());
        }

        writeln!(self.writer)?;
        for (index, (kind, text)) in footnotes.notes.iter().enumerate() {
            let icon = match kind {
                NoteKind::Info => "ⓘ",
                NoteKind::Warning => "⚠",
            };
            writeln!(self.writer, "[{}] {icon} {text}", index + 1)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone)]
enum TextStyle {
    Bold,
    Dimmed,
}

struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn new(color_mode: ColorMode) -> Self {
        Self {
            enabled: super::color_enabled(color_mode),
        }
    }

    fn write_styled_text<W: Write>(&self, writer: &mut W, text: &str, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{text}");
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", text.bold()),
            TextStyle::Dimmed => write!(writer, "{}", text.dimmed()),
        }
    }

    fn write_styled_line<W: Write>(&self, writer: &mut W, ch: &str, width: usize, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{}", ch.repeat(width));
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", ch.repeat(width).bold()),
            TextStyle::Dimmed => write!(writer, "{}", ch.repeat(width).dimmed()),
        }
    }
}

/// Display text with footnote markers already attached, ready for width math.
struct Grid {
    heads: Vec<String>,
    rows: Vec<GridRow>,
}

struct GridRow {
    name: String,
    is_header: bool,
    cells: Vec<String>,
}

impl Grid {
    fn new(matrix: &TableMatrix, footnotes: &mut Footnotes) -> Self {
        let heads = matrix
            .columns
            .iter()
            .map(|column| match column.label.as_deref().filter(|_| column.disabled) {
                Some(label) => format!("{} {}", column.name, footnotes.marker(NoteKind::Warning, label)),
                None => column.name.clone(),
            })
            .collect();

        let rows = matrix
            .rows
            .iter()
            .map(|row| GridRow {
                name: format!("{:indent$}{}", "", row.name, indent = usize::from(row.indent)),
                is_header: row.is_header,
                cells: row
                    .cells
                    .iter()
                    .map(|cell| match cell.note() {
                        Some((kind, text)) => format!("{} {}", cell.display, footnotes.marker(kind, text)),
                        None => cell.display.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self { heads, rows }
    }
}

/// Numbered side notes collected while building the grid. Identical note text
/// shares one number across cells.
#[derive(Default)]
struct Footnotes {
    notes: Vec<(NoteKind, String)>,
}

impl Footnotes {
    fn marker(&mut self, kind: NoteKind, text: &str) -> String {
        let index = match self.notes.iter().position(|(_, existing)| existing == text) {
            Some(index) => index,
            None => {
                self.notes.push((kind, text.to_string()));
                self.notes.len() - 1
            }
        };
        format!("[{}]", index + 1)
    }
}

struct Layout {
    name_width: usize,
    column_widths: Vec<usize>,
    total_width: usize,
}

impl Layout {
    fn new(grid: &Grid) -> Self {
        let terminal_width = detect_terminal_width();
        let name_width = grid
            .rows
            .iter()
            .filter(|row| !row.is_header)
            .map(|row| width_of(&row.name))
            .max()
            .unwrap_or(0);

        let columns = grid.heads.len();
        let cap = if columns == 0 {
            0
        } else {
            (terminal_width.saturating_sub(name_width) / columns)
                .saturating_sub(COLUMN_GAP)
                .max(MIN_CELL_WIDTH)
        };

        let column_widths: Vec<usize> = grid
            .heads
            .iter()
            .enumerate()
            .map(|(index, head)| {
                let natural = grid
                    .rows
                    .iter()
                    .filter(|row| !row.is_header)
                    .filter_map(|row| row.cells.get(index))
                    .map(|cell| width_of(cell))
                    .max()
                    .unwrap_or(0)
                    .max(width_of(head));
                natural.min(cap)
            })
            .collect();

        let total_width = name_width + column_widths.iter().map(|width| width + COLUMN_GAP).sum::<usize>();

        Self {
            name_width,
            column_widths,
            total_width,
        }
    }
}

/// Widths count chars, not bytes; cell text carries glyphs and markers.
fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(width_of(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate(text: &str, max_width: usize) -> String {
    if width_of(text) <= max_width {
        return text.to_string();
    }

    let mut result: String = text.chars().take(max_width.saturating_sub(1)).collect();
    result.push('…');
    result
}

fn detect_terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        DEFAULT_TERMINAL_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Framework;
    use crate::resolve::{ActiveVars, Resolver, build};
    use crate::schema::PropertyDescriptor;
    use serde_json::json;

    fn sample_matrix() -> TableMatrix {
        let frameworks = vec![
            Framework::from_value(json!({"id": "ezkl", "name": "EZKL", "sourceLanguage": "Rust"})).unwrap(),
            Framework::from_value(json!({"id": "zkml", "name": "zkML", "disabled": true, "label": "Not benchmarked."})).unwrap(),
        ];
        let descriptors = vec![
            PropertyDescriptor::header("General"),
            PropertyDescriptor::new("Source Language", "sourceLanguage")
                .with_indent(4)
                .with_info("ezkl", "Rust with Python bindings."),
        ];
        build(&descriptors, &frameworks, &Resolver::new(), &ActiveVars::new())
    }

    #[test]
    fn test_render_plain() {
        let mut out = String::new();
        generate(&sample_matrix(), ColorMode::Never, Some("updated 3 days ago"), &mut out).unwrap();

        assert!(out.contains("EZKL"));
        assert!(out.contains("General"));
        assert!(out.contains("Unknown"));
        assert!(out.contains("updated 3 days ago"));
    }

    #[test]
    fn test_footnotes_are_numbered_in_encounter_order() {
        let mut out = String::new();
        generate(&sample_matrix(), ColorMode::Never, None, &mut out).unwrap();

        // The disabled column label comes first, then the cell info note.
        assert!(out.contains("zkML [1]"));
        assert!(out.contains("Rust [2]"));
        assert!(out.contains("[1] ⚠ Not benchmarked."));
        assert!(out.contains("[2] ⓘ Rust with Python bindings."));
    }

    #[test]
    fn test_identical_notes_share_a_marker() {
        let mut footnotes = Footnotes::default();
        assert_eq!(footnotes.marker(NoteKind::Info, "same text"), "[1]");
        assert_eq!(footnotes.marker(NoteKind::Info, "same text"), "[1]");
        assert_eq!(footnotes.marker(NoteKind::Warning, "other text"), "[2]");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long cell value", 10), "a very lo…");
    }

    #[test]
    fn test_indent_shows_in_row_name() {
        let mut out = String::new();
        generate(&sample_matrix(), ColorMode::Never, None, &mut out).unwrap();
        assert!(out.contains("    Source Language"));
    }
}
