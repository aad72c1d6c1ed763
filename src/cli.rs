use crate::control::SizeClass;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "clipbtn")]
#[command(about = "A terminal copy-to-clipboard button with transient feedback", long_about = None)]
pub struct Cli {
    /// Text to copy. With --copy-and-exit, "-" or no argument reads stdin.
    pub content: Option<String>,

    /// Glyph size tier
    #[arg(short, long, value_enum, default_value_t = SizeArg::Medium)]
    pub size: SizeArg,

    /// Milliseconds before Copied/Failed feedback reverts (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Copy once and exit without launching the TUI
    #[arg(long)]
    pub copy_and_exit: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for SizeClass {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Small => SizeClass::Small,
            SizeArg::Medium => SizeClass::Medium,
            SizeArg::Large => SizeClass::Large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_arg_maps_to_size_class() {
        assert_eq!(SizeClass::from(SizeArg::Small), SizeClass::Small);
        assert_eq!(SizeClass::from(SizeArg::Medium), SizeClass::Medium);
        assert_eq!(SizeClass::from(SizeArg::Large), SizeClass::Large);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["clipbtn", "hello"]);
        assert_eq!(cli.content.as_deref(), Some("hello"));
        assert_eq!(cli.size, SizeArg::Medium);
        assert!(cli.delay_ms.is_none());
        assert!(!cli.copy_and_exit);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "clipbtn",
            "hello",
            "--size",
            "large",
            "--delay-ms",
            "500",
            "--copy-and-exit",
        ]);
        assert_eq!(cli.size, SizeArg::Large);
        assert_eq!(cli.delay_ms, Some(500));
        assert!(cli.copy_and_exit);
    }
}
