use std::io::{self, BufRead, BufReader, Read, Write};

use log::debug;

/// A positional difference between the reference file and the candidate file.
///
/// Line contents keep their terminators exactly as stored, so `"foo\n"` and
/// `"foo"` are distinct values even though they render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number in the reference file.
    pub line_number: usize,

    /// The line as the reference file has it.
    pub expected: String,

    /// The line as the candidate file has it, or the empty string when the
    /// candidate ends before this position.
    pub actual: String,
}

impl Mismatch {
    /// Writes this record in the report format:
    ///
    /// ```text
    /// Line  N :
    /// 	she: <expected>
    /// 	psh: <actual>
    /// ```
    ///
    /// Body lines carry the stored terminator of the source line; a line
    /// without one gets a newline appended so the record stays three lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Line  {} :", self.line_number)?;
        write_labeled(out, "she", &self.expected)?;
        write_labeled(out, "psh", &self.actual)
    }
}

/// Fully consumes `source` into an ordered sequence of lines, keeping each
/// line's terminator. A final line with no trailing newline is kept as-is,
/// so every element is nonempty.
pub fn read_lines<R: Read>(source: R) -> eyre::Result<Vec<String>> {
    let mut reader = BufReader::new(source);
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Compares the candidate against the reference position by position,
/// yielding a [`Mismatch`] for every index where the two disagree.
///
/// The reference length bounds the walk: candidate lines past it are never
/// looked at, and a candidate that ends early contributes the empty string
/// at each missing position (always a mismatch, since loaded lines are
/// never empty).
pub fn diff_lines<'a>(
    reference: &'a [String],
    candidate: &'a [String],
) -> impl Iterator<Item = Mismatch> + 'a {
    reference.iter().enumerate().filter_map(move |(j, expected)| {
        let actual = candidate.get(j).map(String::as_str).unwrap_or("");
        (expected.as_str() != actual).then(|| Mismatch {
            line_number: j + 1,
            expected: expected.clone(),
            actual: actual.to_owned(),
        })
    })
}

/// Loads both sources in full (reference first, then candidate), then streams
/// every mismatch record to `report` as it is found. Returns how many records
/// were written.
pub fn compare<A: Read, B: Read, W: Write>(
    reference: A,
    candidate: B,
    mut report: W,
) -> eyre::Result<usize> {
    let reference = read_lines(reference)?;
    let candidate = read_lines(candidate)?;
    debug!(
        "loaded {} reference line(s), {} candidate line(s)",
        reference.len(),
        candidate.len()
    );

    let mut count = 0;
    for record in diff_lines(&reference, &candidate) {
        record.write_to(&mut report)?;
        count += 1;
    }
    Ok(count)
}

fn write_labeled<W: Write>(out: &mut W, label: &str, line: &str) -> io::Result<()> {
    write!(out, "\t{label}: {line}")?;
    if !line.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}
