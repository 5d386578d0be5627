use std::collections::HashSet;
use std::process::Command;

use tracing::{debug, warn};

use crate::domain::Accession;

/// Maps one accession to the remote directory paths its assembly record
/// lives under. Implementations must swallow their own failures: an
/// accession that cannot be resolved yields an empty vec, never an error.
pub trait AssemblyResolver: Send + Sync {
    fn resolve(&self, accession: &Accession) -> Vec<String>;
}

/// Resolver backed by the Entrez Direct toolchain (`esearch`, `esummary`,
/// `xtract`), composed as a shell pipeline the way the tools are meant to
/// be chained. Requires the toolchain on PATH; a missing toolchain simply
/// makes every accession resolve to nothing.
#[derive(Debug, Clone, Default)]
pub struct EntrezResolver;

impl EntrezResolver {
    pub fn new() -> Self {
        Self
    }

    fn query(accession: &Accession) -> String {
        format!(
            "esearch -db assembly -query \"{}\" | esummary | xtract -pattern DocumentSummary -element FtpPath_GenBank",
            accession.as_str()
        )
    }
}

impl AssemblyResolver for EntrezResolver {
    fn resolve(&self, accession: &Accession) -> Vec<String> {
        let query = Self::query(accession);
        debug!(accession = %accession, "running entrez lookup");
        let output = match Command::new("sh").arg("-c").arg(&query).output() {
            Ok(output) => output,
            Err(err) => {
                warn!(accession = %accession, error = %err, "entrez lookup failed to spawn");
                return Vec::new();
            }
        };
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(accession = %accession, stderr = %stderr, "entrez lookup exited non-zero");
            return Vec::new();
        }
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        dedup_paths(&stdout)
    }
}

/// Collapses the resolver's raw stdout into distinct non-blank directory
/// paths, first occurrence wins.
pub fn dedup_paths(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if seen.insert(line.to_string()) {
            paths.push(line.to_string());
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_collapses_repeats_and_blanks() {
        let raw = "ftp://host/a\n\nftp://host/b\nftp://host/a\n  \n";
        assert_eq!(dedup_paths(raw), vec!["ftp://host/a", "ftp://host/b"]);
    }

    #[test]
    fn dedup_empty_output_is_empty() {
        assert!(dedup_paths("").is_empty());
        assert!(dedup_paths("\n \n").is_empty());
    }

    #[test]
    fn query_embeds_accession() {
        let acc = Accession::new("GCF_000005845.2");
        let query = EntrezResolver::query(&acc);
        assert!(query.contains("-query \"GCF_000005845.2\""));
        assert!(query.starts_with("esearch -db assembly"));
        assert!(query.contains("FtpPath_GenBank"));
    }
}
