const MIN_COLUMN_WIDTH: usize = 6;
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Aligned plain-text table. Numeric-looking cells are right-aligned.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) -> &mut Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        self.shrink_to(&mut widths, options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        let divider = "-".repeat(header_line.chars().count());

        let mut lines = vec![header_line.trim_end().to_string(), divider];
        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                    let padded = pad(&cell, *width, looks_numeric(&cell));
                    if options.color {
                        colorize(&padded, &cell)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                    .max()
                    .unwrap_or(MIN_COLUMN_WIDTH)
            })
            .collect()
    }

    /// Narrow the widest shrinkable column one character at a time.
    fn shrink_to(&self, widths: &mut [usize], max_width: Option<usize>) {
        let Some(max_width) = max_width else {
            return;
        };
        let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.len();

        while widths.iter().sum::<usize>() + gaps > max_width {
            let widest = widths
                .iter()
                .enumerate()
                .filter(|(index, width)| **width > self.floor(*index))
                .max_by_key(|(_, width)| **width)
                .map(|(index, _)| index);
            let Some(index) = widest else {
                break;
            };
            widths[index] -= 1;
        }
    }

    fn floor(&self, index: usize) -> usize {
        self.headers[index].chars().count().max(MIN_COLUMN_WIDTH)
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_start_matches('£').trim_end_matches(['×', '%', 'K', 'M']);
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Colour readiness and confidence words; `padded` is `cell` after alignment.
fn colorize(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "high" | "yes" | "ready now" | "true" => "32",
        "medium" | "critical" | "warning" => "33",
        "low" | "blocker" | "no" | "false" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1)
}
