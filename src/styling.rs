//! Terminal styling for ponyls output.
//!
//! Built on the anstyle ecosystem:
//! - anstream for auto-detecting color support (NO_COLOR, CLICOLOR_FORCE, tty)
//! - a fixed two-token bold wrapper for emphasised names inside grid labels
//!
//! User-facing messages are composed with `color_print::cformat!`:
//! errors `<red>`, hints `<dim>`.

/// Auto-detecting print/println/eprintln re-exports.
pub use anstream::{eprint, eprintln, print, println};

/// Error emoji: `cformat!("{ERROR_EMOJI} <red>message</>")`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji: `cformat!("{HINT_EMOJI} <dim>message</>")`
pub const HINT_EMOJI: &str = "💡";

/// A stateless two-token wrapper for emphasised spans inside grid labels.
///
/// Grid labels carry their emphasis inline so the layout engine can treat
/// them as opaque strings; widths are always computed from the unformatted
/// text, never from the wrapped form. The tokens are fixed wire bytes:
/// `ESC[1m` to start bold and `ESC[21m` to end it. The
/// wrapper is passed into label construction rather than referenced as a
/// global, so the core stays terminal-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Emphasis {
    pub on: &'static str,
    pub off: &'static str,
}

/// Bold emphasis with the wire-exact token pair.
pub const BOLD: Emphasis = Emphasis {
    on: "\x1b[1m",
    off: "\x1b[21m",
};

impl Emphasis {
    /// Wrap `text` in the emphasis token pair.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.on, text, self.off)
    }

    /// Wrap `text` only if `emphasised` holds; used for quoter highlighting.
    pub fn wrap_if(&self, text: &str, emphasised: bool) -> String {
        if emphasised {
            self.wrap(text)
        } else {
            text.to_string()
        }
    }
}
