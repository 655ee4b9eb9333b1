use std::fs::File;
use std::io::Write;
use std::path::Path;
use anyhow::{Result, Context};
use csv::Writer;
use log::info;

use crate::alignment::{AlignmentRecord, ALIGNMENT_COLUMNS, SUBJECT_COLUMN};
use crate::hits::{HitList, HitMatrix};

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))
}

/// Write the titled copy of one sample's hits, with a leading row index
pub fn write_sample_table(path: &Path, records: &[AlignmentRecord]) -> Result<()> {
    write_sample_table_to(create(path)?, records)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

pub fn write_sample_table_to<W: Write>(writer: W, records: &[AlignmentRecord]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(std::iter::once("").chain(ALIGNMENT_COLUMNS))?;
    for (index, record) in records.iter().enumerate() {
        let index = index.to_string();
        wtr.write_record(std::iter::once(index.as_str()).chain(record.fields()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the subject accession by sample count matrix
pub fn write_hit_matrix(path: &Path, matrix: &HitMatrix) -> Result<()> {
    write_hit_matrix_to(create(path)?, matrix)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "Wrote hit matrix ({} subjects x {} samples) to {}",
        matrix.subject_count(),
        matrix.samples().len(),
        path.display()
    );
    Ok(())
}

pub fn write_hit_matrix_to<W: Write>(writer: W, matrix: &HitMatrix) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(
        std::iter::once(SUBJECT_COLUMN).chain(matrix.samples().iter().map(String::as_str)),
    )?;
    for (subject, counts) in matrix.rows() {
        let mut row = Vec::with_capacity(counts.len() + 1);
        row.push(subject.to_string());
        row.extend(counts.iter().map(|count| count.to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the per-sample hit lists, padding short columns with empty cells
pub fn write_hit_list(path: &Path, list: &HitList) -> Result<()> {
    write_hit_list_to(create(path)?, list)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote hit list ({} rows) to {}", list.depth(), path.display());
    Ok(())
}

pub fn write_hit_list_to<W: Write>(writer: W, list: &HitList) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(std::iter::once("").chain(list.samples()))?;
    for index in 0..list.depth() {
        let cells = list.row(index);
        let index = index.to_string();
        wtr.write_record(
            std::iter::once(index.as_str()).chain(cells.into_iter().map(|cell| cell.unwrap_or(""))),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::hits::SampleHits;
    use crate::io::reader::read_alignment_records;

    fn hits(name: &str, subjects: &[&str]) -> SampleHits {
        SampleHits::new(
            name.to_string(),
            subjects.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn render<F>(write: F) -> Result<String>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        write(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_sample_table() -> Result<()> {
        let input = "r1,tetM,98.7,600,8,0,1,600,11,610,1e-150,1050\n\
                     r2,sul1,100.00,840,0,0,1,840,1,840,0.0,1552\n";
        let records = read_alignment_records(input.as_bytes(), Path::new("S01_blast.txt"))?;
        let out = render(|buf| write_sample_table_to(buf, &records))?;

        assert_eq!(
            out,
            ",query_acc.ver,subject_acc.ver,%_identity,alignment_length,mismatches,gap_opens,\
             q._start,q._end,s._start,s._end,evalue,bit_score\n\
             0,r1,tetM,98.7,600,8,0,1,600,11,610,1e-150,1050\n\
             1,r2,sul1,100.00,840,0,0,1,840,1,840,0.0,1552\n"
        );
        Ok(())
    }

    #[test]
    fn test_hit_matrix() -> Result<()> {
        let matrix = HitMatrix::from_samples(&[
            hits("S01", &["tetM", "sul1", "tetM"]),
            hits("S02", &["blaTEM"]),
        ]);
        let out = render(|buf| write_hit_matrix_to(buf, &matrix))?;

        assert_eq!(
            out,
            "subject_acc.ver,S01,S02\nblaTEM,0,1\nsul1,1,0\ntetM,2,0\n"
        );
        Ok(())
    }

    #[test]
    fn test_hit_list() -> Result<()> {
        let list = HitList::from_samples(&[
            hits("S01", &["tetM", "sul1", "tetM"]),
            hits("S02", &["blaTEM"]),
        ]);
        let out = render(|buf| write_hit_list_to(buf, &list))?;

        assert_eq!(out, ",S01,S02\n0,tetM,blaTEM\n1,sul1,\n2,tetM,\n");
        Ok(())
    }

    #[test]
    fn test_empty_aggregates() -> Result<()> {
        let matrix = render(|buf| write_hit_matrix_to(buf, &HitMatrix::from_samples(&[])))?;
        assert_eq!(matrix, "subject_acc.ver\n");

        let list = render(|buf| write_hit_list_to(buf, &HitList::from_samples(&[])))?;
        assert_eq!(list, "\"\"\n");
        Ok(())
    }
}
