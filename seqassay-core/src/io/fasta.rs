use crate::error::{AnalysisError, AnalysisResult};
use crate::seq::record::RawRecord;
use std::io::{BufRead, BufReader, Cursor};

/// Streaming FASTA reader yielding raw records. Sequence text is collected
/// with whitespace stripped but otherwise untouched; validation against an
/// alphabet happens later, once the sequence type is known.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
    seq_buf: String,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: String::new(),
        }
    }

    fn next_header(&mut self) -> Option<AnalysisResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(AnalysisError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(AnalysisError::Io(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = AnalysisResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some((self.buf_line.clone(), line_no));
                        break;
                    }
                    self.seq_buf
                        .extend(self.buf_line.chars().filter(|c| !c.is_ascii_whitespace()));
                }
                Err(err) => return Some(Err(AnalysisError::Io(err))),
            }
        }

        let seq = std::mem::take(&mut self.seq_buf);
        let record = RawRecord { id, desc, seq };
        Some(Ok(record))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> AnalysisResult<Vec<RawRecord>> {
    let mut out = Vec::new();
    for record in fasta_records_from_reader(reader) {
        out.push(record?);
    }
    Ok(out)
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> AnalysisResult<Vec<RawRecord>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader)
}

fn parse_header(header_line: &str, line_no: usize) -> AnalysisResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line
        .strip_prefix('>')
        .ok_or(AnalysisError::FastaFormat {
            msg: "expected header line starting with '>'",
            line: line_no,
        })?;

    let header = header.trim_end_matches(['\n', '\r']).trim_start();
    if header.is_empty() {
        return Err(AnalysisError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(|c: char| c.is_whitespace()) {
        Some(idx) => {
            let id = &header[..idx];
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (id, desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_record() {
        let data = b">seq1\nACGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), None);
        assert_eq!(records[0].seq(), "ACGT");
    }

    #[test]
    fn header_with_description() {
        let data = b">seq1 some desc here\nAC\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), Some("some desc here"));
        assert_eq!(records[0].seq(), "ACGT");
    }

    #[test]
    fn multiple_records() {
        let data = b">seq1\nAC\n>seq2\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[1].id(), "seq2");
    }

    #[test]
    fn sequence_text_is_not_validated_here() {
        // Mixed case and ambiguity codes pass through; the analysis layer
        // normalizes and validates against the inferred type.
        let data = b">seq1\nacgtNX\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].seq(), "acgtNX");
    }

    #[test]
    fn empty_sequence_allowed() {
        let data = b">seq1\n>seq2\nA\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq(), "");
        assert_eq!(records[1].seq(), "A");
    }

    #[test]
    fn invalid_format_before_header() {
        let data = b"ACGT\n>seq1\nAC\n";
        let err = read_fasta_records_from_bytes(data).unwrap_err();
        match err {
            AnalysisError::FastaFormat { line, .. } => assert_eq!(line, 1),
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(read_fasta_records_from_bytes(b"").unwrap().is_empty());
        assert!(read_fasta_records_from_bytes(b"\n\n").unwrap().is_empty());
    }
}
