use std::fmt;

use clap::ValueEnum;

/// Sentinel written to the output table whenever a link could not be
/// produced or validated for a directory path.
pub const NOT_FOUND: &str = "Not Found";

/// One input identifier, taken verbatim from a line of the accession list.
/// No format checking happens here: whatever the line says is what gets
/// handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accession(String);

impl Accession {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File type requested for the whole run, selecting the suffix appended to
/// the assembly base name under its remote directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    /// Genomic nucleotide FASTA
    Fna,
    /// Gene features, GFF3
    Gff,
    /// Gene features, GTF
    Gtf,
    /// Protein FASTA
    Faa,
}

impl FileFormat {
    pub fn suffix(self) -> &'static str {
        match self {
            FileFormat::Fna => "_genomic.fna.gz",
            FileFormat::Gff => "_genomic.gff.gz",
            FileFormat::Gtf => "_genomic.gtf.gz",
            FileFormat::Faa => "_protein.faa.gz",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Fna => write!(f, "fna"),
            FileFormat::Gff => write!(f, "gff"),
            FileFormat::Gtf => write!(f, "gtf"),
            FileFormat::Faa => write!(f, "faa"),
        }
    }
}

/// Outcome of the build-and-validate pipeline for one directory path.
/// Failures flow through this type as the `NotFound` variant instead of
/// being raised, so every stage stays total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLink {
    Url(String),
    NotFound,
}

impl ResolvedLink {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolvedLink::NotFound)
    }
}

impl fmt::Display for ResolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedLink::Url(url) => write!(f, "{url}"),
            ResolvedLink::NotFound => write!(f, "{NOT_FOUND}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accession_trims_surrounding_whitespace() {
        let acc = Accession::new("  GCF_000005845.2\n");
        assert_eq!(acc.as_str(), "GCF_000005845.2");
    }

    #[test]
    fn format_suffixes() {
        assert_eq!(FileFormat::Fna.suffix(), "_genomic.fna.gz");
        assert_eq!(FileFormat::Gff.suffix(), "_genomic.gff.gz");
        assert_eq!(FileFormat::Gtf.suffix(), "_genomic.gtf.gz");
        assert_eq!(FileFormat::Faa.suffix(), "_protein.faa.gz");
    }

    #[test]
    fn not_found_displays_sentinel() {
        assert_eq!(ResolvedLink::NotFound.to_string(), "Not Found");
    }
}
