//! In-place redraw of successive frames.

use std::io::{self, Write};

const DISABLE_WRAP: &str = "\x1b[?7l";
const ENABLE_WRAP: &str = "\x1b[?7h";

/// Writes frames to a sink, optionally erasing the previous frame first.
///
/// With `redraw` off every frame is appended, which suits pipes and logs.
/// With `redraw` on, line wrapping is switched off while a frame is
/// written, so a long line is clipped at the terminal edge and the erase
/// count always matches the frame's line count.
pub struct LiveDisplay<W: Write> {
    out: W,
    redraw: bool,
    rendered_lines: usize,
}

impl LiveDisplay<io::Stdout> {
    /// Display on stdout.
    pub fn stdout(redraw: bool) -> Self {
        Self::new(io::stdout(), redraw)
    }
}

impl<W: Write> LiveDisplay<W> {
    pub fn new(out: W, redraw: bool) -> Self {
        Self {
            out,
            redraw,
            rendered_lines: 0,
        }
    }

    /// Replace the previous frame (or append, without redraw) with `frame`.
    pub fn show(&mut self, frame: &str) -> io::Result<()> {
        if self.redraw {
            for _ in 0..self.rendered_lines {
                // Move up one line and clear it
                write!(self.out, "\x1b[1A\x1b[2K")?;
            }
            write!(self.out, "{DISABLE_WRAP}{frame}{ENABLE_WRAP}")?;
        } else {
            self.out.write_all(frame.as_bytes())?;
        }
        self.out.flush()?;
        self.rendered_lines = frame.lines().count();
        Ok(())
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
