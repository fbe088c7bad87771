use crate::Grid;
use std::io::{self, Write};

/// Separator printed above every rendered generation
pub const SEPARATOR: &str = "================================";

/// Something that can show a generation once it has been computed
pub trait Render {
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}

/// Plain text renderer: a separator line followed by the tab-separated rows of the grid
pub struct TextRender<W: Write> {
    out: W,
}
impl<W: Write> TextRender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the rows of `grid` without a separator, used for the input state
    pub fn render_plain(&mut self, grid: &Grid) -> io::Result<()> {
        write!(self.out, "{}", grid)?;
        self.out.flush()
    }

    /// Writes a single line of text, for driver messages between generations
    pub fn message<T: AsRef<str>>(&mut self, message: T) -> io::Result<()> {
        writeln!(self.out, "{}", message.as_ref())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
impl TextRender<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}
impl<W: Write> Render for TextRender<W> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "{}", SEPARATOR)?;
        self.render_plain(grid)
    }
}
