use crate::domain::{FileFormat, ResolvedLink};

/// Turns a remote assembly directory path into the download URL for the
/// requested file type. The legacy `ftp://` scheme is rewritten to
/// `https://` (the NCBI mirror serves the same tree over both) and the
/// directory's final segment doubles as the base of every file inside it.
///
/// Pure and total: a blank path short-circuits to `NotFound`.
pub fn build_link(directory_path: &str, format: FileFormat) -> ResolvedLink {
    let directory_path = directory_path.trim();
    if directory_path.is_empty() {
        return ResolvedLink::NotFound;
    }
    let https = if let Some(rest) = directory_path.strip_prefix("ftp://") {
        format!("https://{rest}")
    } else {
        directory_path.to_string()
    };
    let Some(base) = https.rsplit('/').next().filter(|base| !base.is_empty()) else {
        return ResolvedLink::NotFound;
    };
    ResolvedLink::Url(format!("{https}/{base}{}", format.suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_ftp_and_appends_genomic_suffix() {
        let link = build_link("ftp://host/dir/GCF_000001", FileFormat::Fna);
        assert_eq!(
            link,
            ResolvedLink::Url("https://host/dir/GCF_000001/GCF_000001_genomic.fna.gz".to_string())
        );
    }

    #[test]
    fn protein_suffix() {
        let link = build_link(
            "ftp://ftp.ncbi.nlm.nih.gov/genomes/all/GCF/000/005/845/GCF_000005845.2_ASM584v2",
            FileFormat::Faa,
        );
        assert_eq!(
            link,
            ResolvedLink::Url(
                "https://ftp.ncbi.nlm.nih.gov/genomes/all/GCF/000/005/845/GCF_000005845.2_ASM584v2/GCF_000005845.2_ASM584v2_protein.faa.gz"
                    .to_string()
            )
        );
    }

    #[test]
    fn already_https_path_is_kept() {
        let link = build_link("https://host/dir/GCA_9", FileFormat::Gtf);
        assert_eq!(
            link,
            ResolvedLink::Url("https://host/dir/GCA_9/GCA_9_genomic.gtf.gz".to_string())
        );
    }

    #[test]
    fn blank_path_short_circuits() {
        assert_eq!(build_link("", FileFormat::Fna), ResolvedLink::NotFound);
        assert_eq!(build_link("   ", FileFormat::Gff), ResolvedLink::NotFound);
    }

    #[test]
    fn trailing_slash_yields_not_found() {
        assert_eq!(
            build_link("ftp://host/dir/", FileFormat::Fna),
            ResolvedLink::NotFound
        );
    }

    #[test]
    fn deterministic() {
        let a = build_link("ftp://host/dir/GCF_1", FileFormat::Gff);
        let b = build_link("ftp://host/dir/GCF_1", FileFormat::Gff);
        assert_eq!(a, b);
    }
}
