//! FASTA sink for stitched contigs.
//!
//! Each contig is written as `>key` and its sequence on a single line, in the
//! order given. Sequences are not wrapped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::contig::Contig;
use crate::utils::validation::is_stdio;

/// Write contigs as unwrapped FASTA records
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_fasta<W: Write>(writer: &mut W, contigs: &[Contig]) -> io::Result<()> {
    for contig in contigs {
        writeln!(writer, ">{}", contig.key)?;
        writeln!(writer, "{}", contig.sequence)?;
    }
    writer.flush()
}

/// Write contigs to `path`, or to stdout when `path` is `-`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_fasta_file(path: &Path, contigs: &[Contig]) -> io::Result<()> {
    if is_stdio(path) {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_fasta(&mut writer, contigs)
    } else {
        let mut writer = BufWriter::new(File::create(path)?);
        write_fasta(&mut writer, contigs)
    }
}
