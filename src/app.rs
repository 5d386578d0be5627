use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::{Accession, FileFormat, ResolvedLink};
use crate::error::AcclinkError;
use crate::link::build_link;
use crate::probe::LinkProbe;
use crate::report::TsvReport;
use crate::resolver::AssemblyResolver;

/// Row counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub not_found: usize,
}

/// Drives the accession-to-link pipeline: resolve, build, probe, write,
/// one accession at a time in input order. Each accession is independent;
/// nothing carries across iterations.
pub struct App<R, P> {
    resolver: R,
    probe: P,
}

impl<R: AssemblyResolver, P: LinkProbe> App<R, P> {
    pub fn new(resolver: R, probe: P) -> Self {
        Self { resolver, probe }
    }

    pub fn run<I: BufRead, W: Write>(
        &self,
        input: I,
        format: FileFormat,
        report: &mut TsvReport<W>,
    ) -> Result<RunSummary, AcclinkError> {
        report.write_header()?;
        let mut summary = RunSummary::default();
        for line in input.lines() {
            let line = line.map_err(|err| AcclinkError::InputIo(err.to_string()))?;
            let accession = Accession::new(line);
            self.process(&accession, format, report, &mut summary)?;
        }
        Ok(summary)
    }

    fn process<W: Write>(
        &self,
        accession: &Accession,
        format: FileFormat,
        report: &mut TsvReport<W>,
        summary: &mut RunSummary,
    ) -> Result<(), AcclinkError> {
        let paths = self.resolver.resolve(accession);
        debug!(accession = %accession, paths = paths.len(), "resolved");
        if paths.is_empty() {
            report.write_row(accession, &ResolvedLink::NotFound)?;
            summary.rows += 1;
            summary.not_found += 1;
            return Ok(());
        }
        for path in &paths {
            let link = match build_link(path, format) {
                ResolvedLink::Url(url) if self.probe.is_reachable(&url) => ResolvedLink::Url(url),
                _ => ResolvedLink::NotFound,
            };
            if link.is_not_found() {
                summary.not_found += 1;
            }
            report.write_row(accession, &link)?;
            summary.rows += 1;
        }
        Ok(())
    }
}
