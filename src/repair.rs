/*! Line repair

Fixes the two known kinds of damage in the linked TSV before it is parsed:

- entries split over two physical lines because of an unescaped quote in the Hindi gloss.
  The first half has 7 or 8 columns, the second half has exactly 2 columns and starts with a quote.
  Both are merged back into one line.
- `WordN` used as a relation label, which is normalized to `Hypernymy`.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Error;

/// Number of columns of a well-formed line.
pub const NB_COLUMNS: usize = 9;

const MISLABELED_RELATION: &str = "WordN";
const HYPERNYMY: &str = "Hypernymy";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepairStats {
    pub total_lines: usize,
    pub merged_lines: usize,
    pub fixed_wordn: usize,
    pub output_lines: usize,
}

/// Checks that `cols` looks like the first half of a split entry and `next` like its orphaned end.
fn is_split(cols: &[&str], next: &[&str]) -> bool {
    (7..NB_COLUMNS).contains(&cols.len()) && next.len() == 2 && next[0].starts_with('"')
}

/// Repair lines (without their line terminators).
///
/// Returns the repaired lines along with statistics about the applied fixes.
pub fn repair_lines<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, RepairStats) {
    let mut stats = RepairStats {
        total_lines: lines.len(),
        ..Default::default()
    };
    let mut fixed = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();
        let mut cols: Vec<&str> = line.split('\t').collect();

        if let Some(next_line) = lines.get(i + 1) {
            let next_cols: Vec<&str> = next_line.as_ref().split('\t').collect();
            if is_split(&cols, &next_cols) {
                let last = cols.len() - 1;
                let merged_gloss = format!("{} {}", cols[last], next_cols[0]);
                let mut merged = cols[..last].to_vec();
                merged.push(&merged_gloss);
                merged.push(next_cols[1]);

                info!(
                    "Merged lines {}-{}: {} ({}...)",
                    i + 1,
                    i + 2,
                    merged[0],
                    merged[4].chars().take(30).collect::<String>()
                );
                fixed.push(merged.join("\t"));
                stats.merged_lines += 1;
                i += 2;
                continue;
            }
        }

        if cols.len() >= NB_COLUMNS && cols[cols.len() - 1].trim() == MISLABELED_RELATION {
            let last = cols.len() - 1;
            cols[last] = HYPERNYMY;
            info!(
                "Fixed {}→{} on line {}: IWN {} ({}...)",
                MISLABELED_RELATION,
                HYPERNYMY,
                i + 1,
                cols[0],
                cols[6].chars().take(20).collect::<String>()
            );
            fixed.push(cols.join("\t"));
            stats.fixed_wordn += 1;
        } else {
            fixed.push(line.to_string());
        }
        i += 1;
    }

    stats.output_lines = fixed.len();
    (fixed, stats)
}

/// Repair the TSV located at `src`, writing the corrected file at `dst`.
pub fn repair(src: &Path, dst: &Path) -> Result<RepairStats, Error> {
    info!("Fixing malformed lines in {:?}", src);
    let reader = BufReader::new(File::open(src)?);
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

    let (fixed, stats) = repair_lines(&lines);

    let mut writer = BufWriter::new(File::create(dst)?);
    for line in &fixed {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    info!("Input lines:  {}", stats.total_lines);
    info!("Output lines: {}", stats.output_lines);
    info!("Merged split lines: {}", stats.merged_lines);
    info!("Fixed {}→{}: {}", MISLABELED_RELATION, HYPERNYMY, stats.fixed_wordn);
    info!("Written to: {:?}", dst);

    Ok(stats)
}
