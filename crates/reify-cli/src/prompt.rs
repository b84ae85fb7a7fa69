//! Interactive version selection

use anyhow::{bail, Result};
use reify_asset::{ManifestCatalog, ManifestFile};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Reads whitespace-delimited tokens from a line-oriented source
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, blocking for more lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Prompt until the input names one of the catalog's manifests.
pub fn select_manifest<'c, R, W>(
    catalog: &'c ManifestCatalog,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<&'c ManifestFile>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(
            out,
            "Please select which version you would like to grab the assets from:"
        )?;
        for name in catalog.names() {
            writeln!(out, "  - {name}")?;
        }
        writeln!(out)?;
        out.flush()?;

        let Some(token) = input.next_token()? else {
            bail!("No version was selected before input ended");
        };
        if let Some(manifest) = catalog.select(&token) {
            return Ok(manifest);
        }

        writeln!(out, "\nThe version \"{token}\" was not found\n")?;
    }
}
