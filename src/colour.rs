use clap::ValueEnum;
use is_terminal::IsTerminal;

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub(crate) enum Colour {
    #[default]
    Auto,
    Always,
    Never,
}

impl Colour {
    /// Resolves "auto" to either "always" or "never" depending on whether
    /// diagnostics are going to a tty, then points the colored crate's global
    /// override at the result. Stdout is never decorated, since it carries
    /// the generated bytes.
    pub(crate) fn detect(self) -> Self {
        let resolved = match self {
            Colour::Auto => {
                if std::io::stderr().is_terminal() {
                    Colour::Always
                } else {
                    Colour::Never
                }
            }
            other => other,
        };
        colored::control::set_override(matches!(resolved, Colour::Always));
        resolved
    }
}
