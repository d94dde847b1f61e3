use match_at::Match;
use std::io;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output<W: WriteColor = StandardStream> {
    stdout: W,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }
}

impl Output<Buffer> {
    /// Uncolored, in-memory output.
    pub fn buffer() -> Self {
        Self {
            stdout: Buffer::no_color(),
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.stdout.as_slice()).into_owned()
    }
}

impl<W: WriteColor> Output<W> {
    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_match_color(&mut self) {
        let _ = self
            .stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    /// The matched text, its character range, then one line per group.
    pub fn print_match(&mut self, m: &Match) -> io::Result<()> {
        self.set_match_color();
        write!(self.stdout, "{}", m.as_str())?;
        self.reset();
        writeln!(self.stdout)?;

        self.set_dim();
        writeln!(self.stdout, "{}..{}", m.start(), m.end())?;
        self.reset();

        for (index, (group, name)) in m.groups().iter().zip(m.group_names()).enumerate() {
            let label = match name {
                Some(name) => name.to_string(),
                None => (index + 1).to_string(),
            };
            write!(self.stdout, "  ${} = ", label)?;
            match group {
                Some(capture) => {
                    self.set_color(Color::Cyan);
                    write!(self.stdout, "{:?}", capture.as_str())?;
                    self.reset();
                    self.set_dim();
                    writeln!(self.stdout, " ({}..{})", capture.start(), capture.end())?;
                    self.reset();
                }
                None => {
                    self.set_dim();
                    writeln!(self.stdout, "(no match)")?;
                    self.reset();
                }
            }
        }
        self.stdout.flush()
    }

    pub fn print_len(&mut self, len: usize) -> io::Result<()> {
        writeln!(self.stdout, "{}", len)?;
        self.stdout.flush()
    }

    /// `null` when there is no match.
    pub fn print_json(&mut self, m: Option<&Match>) -> crate::error::Result<()> {
        let json = serde_json::to_string(&m)?;
        writeln!(self.stdout, "{}", json)?;
        self.stdout.flush()?;
        Ok(())
    }
}
