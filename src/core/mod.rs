//! Shared terminal plumbing.

use anyhow::Context;
use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Whether long output should be paged: only when stdout is an interactive
/// terminal and the user did not opt out.
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && io::stdout().is_terminal()
}

/// Page `text` through minus, or stream it to `writer` when paging is off.
/// Both paths go through `Write`, so commands render once and stay agnostic
/// of where the output lands.
pub fn page_or_write(writer: &mut dyn Write, text: &str, paged: bool) -> anyhow::Result<()> {
    if paged {
        let pager = Pager::new();
        let mut paged_writer = PagerWriter::new(pager.clone());
        write!(paged_writer, "{text}")?;
        minus::page_all(pager).context("failed to page output")?;
    } else {
        write!(writer, "{text}")?;
    }

    Ok(())
}

/// Adapter that implements `Write` for the minus pager.
///
/// The pager only accepts pushed strings, so this wrapper bridges it to
/// Rust's standard I/O traits and lets it stand in for stdout.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
