use std::io::Write;

use crate::domain::{Accession, ResolvedLink};
use crate::error::AcclinkError;

/// Tab-separated result table. Rows are flushed as they are written so an
/// interrupted run keeps everything emitted up to that point.
pub struct TsvReport<W: Write> {
    writer: W,
}

impl<W: Write> TsvReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> Result<(), AcclinkError> {
        writeln!(self.writer, "Accession\tLink")
            .map_err(|err| AcclinkError::OutputIo(err.to_string()))?;
        self.writer
            .flush()
            .map_err(|err| AcclinkError::OutputIo(err.to_string()))
    }

    pub fn write_row(
        &mut self,
        accession: &Accession,
        link: &ResolvedLink,
    ) -> Result<(), AcclinkError> {
        writeln!(self.writer, "{accession}\t{link}")
            .map_err(|err| AcclinkError::OutputIo(err.to_string()))?;
        self.writer
            .flush()
            .map_err(|err| AcclinkError::OutputIo(err.to_string()))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_rows() {
        let mut report = TsvReport::new(Vec::new());
        report.write_header().unwrap();
        report
            .write_row(
                &Accession::new("GCF_1"),
                &ResolvedLink::Url("https://host/GCF_1/GCF_1_genomic.fna.gz".to_string()),
            )
            .unwrap();
        report
            .write_row(&Accession::new("GCF_2"), &ResolvedLink::NotFound)
            .unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            text,
            "Accession\tLink\nGCF_1\thttps://host/GCF_1/GCF_1_genomic.fna.gz\nGCF_2\tNot Found\n"
        );
    }
}
