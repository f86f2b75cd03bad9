//! Presentation collaborators: text chart and console report.
//!
//! Everything here consumes a finished [`SimulationResult`] and renders it;
//! nothing feeds back into the simulation. Rendering failures surface as
//! `io::Result` from the sink and cannot corrupt the result itself.

use std::io;

use crate::simulate::SimulationResult;

const GUTTER: usize = 10;

/// Render the trajectory as a plain-text line chart.
///
/// Values are plotted over trade index, downsampled to at most `width`
/// columns. The ruin threshold at zero is drawn as a dashed horizontal line
/// and is always kept inside the plotted range. Returns an empty string for
/// an empty trajectory or a degenerate size.
pub fn render_chart(result: &SimulationResult, width: usize, height: usize) -> String {
    let traj = &result.trajectory;
    if traj.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;
    for &v in traj {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi <= lo {
        hi = lo + 1.0;
    }

    let cols = width.min(traj.len());
    let row_for = |v: f64| -> usize {
        let r = ((hi - v) / (hi - lo) * (height - 1) as f64).round();
        (r as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; cols]; height];

    // Ruin threshold line.
    let zero_row = row_for(0.0);
    for cell in &mut grid[zero_row] {
        *cell = '-';
    }

    // One sample per column, nearest trajectory entry.
    for (c, row) in (0..cols).map(|c| {
        let idx = if cols > 1 {
            c * (traj.len() - 1) / (cols - 1)
        } else {
            0
        };
        (c, row_for(traj[idx]))
    }) {
        grid[row][c] = '*';
    }

    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            format!("{hi:>width$.2}", width = GUTTER)
        } else if r == height - 1 {
            format!("{lo:>width$.2}", width = GUTTER)
        } else if r == zero_row {
            format!("{:>width$.2}", 0.0, width = GUTTER)
        } else {
            " ".repeat(GUTTER)
        };
        out.push_str(&label);
        out.push_str(" |");
        out.extend(row.iter());
        out.push('\n');
    }

    // X axis with the executed trade count under the last column.
    out.push_str(&" ".repeat(GUTTER));
    out.push_str(" +");
    out.push_str(&"-".repeat(cols));
    out.push('\n');

    let x_label = format!("{} trades", result.trades_executed());
    out.push_str(&" ".repeat(GUTTER));
    out.push_str(" 0");
    if cols > x_label.len() + 1 {
        out.push_str(&format!("{x_label:>pad$}", pad = cols - 1));
    } else {
        out.push(' ');
        out.push_str(&x_label);
    }
    out.push('\n');

    out
}

/// Write the chart and the survival verdict to `w`.
pub fn write_report<W: io::Write>(w: &mut W, result: &SimulationResult) -> io::Result<()> {
    write!(w, "{}", render_chart(result, 72, 20))?;
    writeln!(w)?;
    if result.ruined {
        writeln!(w, "The portfolio reached ruin.")
    } else {
        writeln!(w, "The portfolio survived the simulation.")
    }
}
