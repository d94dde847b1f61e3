use clap::Parser;
use match_at::Charset;

#[derive(Parser, Debug)]
#[command(
    name = "matchat",
    about = "Match a regex at an exact character position",
    version
)]
pub struct Cli {
    /// Regular expression to match
    pub pattern: String,

    /// Text to match against, or "-" to read from stdin
    #[arg(default_value = "-")]
    pub text: String,

    /// Character index to match at; negative counts back from the end
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub position: String,

    /// Case-insensitive matching
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Make ^ and $ match at line boundaries
    #[arg(short, long)]
    pub multi_line: bool,

    /// Make . match newlines
    #[arg(short = 's', long)]
    pub dot_all: bool,

    /// Ignore whitespace and allow # comments in the pattern
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// Treat the pattern as a literal string
    #[arg(short = 'F', long)]
    pub fixed_strings: bool,

    /// Character set the text is tagged with
    #[arg(long, default_value = "UTF-8")]
    pub text_charset: Charset,

    /// Character set the pattern is tagged with
    #[arg(long, default_value = "UTF-8")]
    pub pattern_charset: Charset,

    /// Print nothing; report the result through the exit status only
    #[arg(short, long, conflicts_with_all = ["length", "json"])]
    pub quiet: bool,

    /// Print the length of the match in characters
    #[arg(short, long, conflicts_with = "json")]
    pub length: bool,

    /// Print the match as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
