//! Minimal GenBank flat-file reader: enough to pull the sequence text out of
//! the ORIGIN block of each record. Features, qualifiers, and the rest of the
//! annotation header are ignored.

use crate::error::{AnalysisError, AnalysisResult};
use crate::seq::record::RawRecord;
use std::io::{BufRead, BufReader, Cursor};

pub fn read_genbank_records_from_reader<R: BufRead>(reader: R) -> AnalysisResult<Vec<RawRecord>> {
    let mut records = Vec::new();

    let mut current_id: Option<Box<str>> = None;
    let mut current_desc: Option<Box<str>> = None;
    let mut in_origin = false;
    let mut seq = String::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if let Some(rest) = line.strip_prefix("LOCUS") {
            let name = rest.split_whitespace().next().ok_or_else(|| {
                AnalysisError::GenBankFormat {
                    msg: "LOCUS line without a record name",
                    line: line_no,
                }
            })?;
            current_id = Some(name.into());
            current_desc = None;
            in_origin = false;
            seq.clear();
        } else if let Some(rest) = line.strip_prefix("DEFINITION") {
            let desc = rest.trim().trim_end_matches('.');
            if !desc.is_empty() {
                current_desc = Some(desc.into());
            }
        } else if line.starts_with("ORIGIN") {
            if current_id.is_none() {
                return Err(AnalysisError::GenBankFormat {
                    msg: "ORIGIN block before any LOCUS line",
                    line: line_no,
                });
            }
            in_origin = true;
        } else if line.starts_with("//") {
            if let Some(id) = current_id.take() {
                records.push(RawRecord {
                    id,
                    desc: current_desc.take(),
                    seq: std::mem::take(&mut seq),
                });
            }
            in_origin = false;
        } else if in_origin {
            // Sequence lines carry a position number and space-grouped bases:
            //       1 gatcctccat atacaacggt
            seq.extend(
                line.chars()
                    .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_digit()),
            );
        }
    }

    // A record missing its trailing // still counts if it got a LOCUS line.
    if let Some(id) = current_id.take() {
        records.push(RawRecord {
            id,
            desc: current_desc.take(),
            seq,
        });
    }

    Ok(records)
}

pub fn read_genbank_records_from_bytes(data: &[u8]) -> AnalysisResult<Vec<RawRecord>> {
    let reader = BufReader::new(Cursor::new(data));
    read_genbank_records_from_reader(reader)
}
