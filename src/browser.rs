//! Browser launchers and text-based browser detection.
//!
//! A map opened in a terminal browser is useless, so callers check
//! [`is_text_based`] before handing it a page.

use std::env;
use std::path::Path;

/// The kinds of browser launcher a launcher registry knows about.
///
/// Every kind is distinct: a [`BrowserKind::Background`] launcher is
/// never considered [`BrowserKind::Generic`] even though both run a
/// plain command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    /// Command run in the foreground, typically a console browser
    /// (`lynx`, `w3m`, `links`).
    Generic,
    /// Command run in the background.
    Background,
    Mozilla,
    Netscape,
    Galeon,
    Chrome,
    Chromium,
    Opera,
    Elinks,
    Konqueror,
    Epiphany,
    Grail,
    /// `open` on macOS.
    MacOsX,
    /// The default browser on Windows.
    WindowsDefault,
}

/// Kinds rendering in the terminal.
const TEXT_BASED: [BrowserKind; 2] = [BrowserKind::Generic, BrowserKind::Elinks];

/// Commands known to a launcher registry and the kind they map to.
const KNOWN_COMMANDS: &[(&str, BrowserKind)] = &[
    ("lynx", BrowserKind::Generic),
    ("w3m", BrowserKind::Generic),
    ("links", BrowserKind::Generic),
    ("elinks", BrowserKind::Elinks),
    ("firefox", BrowserKind::Mozilla),
    ("iceweasel", BrowserKind::Mozilla),
    ("iceape", BrowserKind::Mozilla),
    ("seamonkey", BrowserKind::Mozilla),
    ("mozilla", BrowserKind::Mozilla),
    ("netscape", BrowserKind::Netscape),
    ("galeon", BrowserKind::Galeon),
    ("epiphany", BrowserKind::Epiphany),
    ("google-chrome", BrowserKind::Chrome),
    ("chrome", BrowserKind::Chrome),
    ("chromium", BrowserKind::Chromium),
    ("chromium-browser", BrowserKind::Chromium),
    ("opera", BrowserKind::Opera),
    ("konqueror", BrowserKind::Konqueror),
    ("kfm", BrowserKind::Konqueror),
    ("grail", BrowserKind::Grail),
    ("open", BrowserKind::MacOsX),
    ("windows-default", BrowserKind::WindowsDefault),
];

/// A browser launcher: its kind and the name it was registered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Browser {
    pub kind: BrowserKind,
    pub name: String,
}

impl Browser {
    pub fn new(kind: BrowserKind, name: impl Into<String>) -> Self {
        Browser { kind, name: name.into() }
    }

    /// Classify a launch command by its program name.  Arguments
    /// (`"lynx -nocolor %s"`) and directories (`/usr/bin/elinks`) are
    /// ignored.  Unknown programs are run as [`BrowserKind::Background`]
    /// commands.
    ///
    /// ```
    /// use chronomap::{Browser, BrowserKind};
    /// assert_eq!(Browser::from_command("/usr/bin/w3m %s").kind,
    ///            BrowserKind::Generic);
    /// assert!(Browser::from_command("elinks").is_text_based());
    /// assert!(!Browser::from_command("firefox").is_text_based());
    /// ```
    pub fn from_command(command: &str) -> Self {
        let program = command.split_whitespace().next().unwrap_or("");
        let name = Path::new(program).file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(program);
        let kind = KNOWN_COMMANDS.iter()
            .find(|(cmd, _)| cmd.eq_ignore_ascii_case(name))
            .map_or(BrowserKind::Background, |&(_, kind)| kind);
        log::trace!("Browser command {command:?} classified as {kind:?}");
        Browser::new(kind, name)
    }

    /// The browser the user asked for through the `BROWSER`
    /// environment variable (first entry of the `:` separated list),
    /// if any.
    pub fn from_env() -> Option<Self> {
        let value = env::var("BROWSER").ok()?;
        Self::from_browser_var(&value)
    }

    fn from_browser_var(value: &str) -> Option<Self> {
        value.split(':')
            .map(str::trim)
            .find(|cmd| !cmd.is_empty())
            .map(Self::from_command)
    }

    /// See [`is_text_based`].
    #[inline]
    pub fn is_text_based(&self) -> bool { is_text_based(self) }
}

/// Returns whether `browser` renders in a terminal, i.e. whether its
/// kind is exactly [`BrowserKind::Generic`] or [`BrowserKind::Elinks`].
pub fn is_text_based(browser: &Browser) -> bool {
    TEXT_BASED.contains(&browser.kind)
}


#[cfg(test)]
mod tests {
    use super::*;
    use BrowserKind::*;

    const ALL: [BrowserKind; 14] = [
        Generic, Background, Mozilla, Netscape, Galeon, Chrome, Chromium,
        Opera, Elinks, Konqueror, Epiphany, Grail, MacOsX, WindowsDefault];

    #[test]
    fn only_generic_and_elinks_are_text_based() {
        for kind in ALL {
            let b = Browser::new(kind, "x");
            assert_eq!(is_text_based(&b), matches!(kind, Generic | Elinks),
                       "{kind:?}");
        }
    }

    #[test]
    fn command_classification() {
        assert_eq!(Browser::from_command("lynx").kind, Generic);
        assert_eq!(Browser::from_command("  links -g %s").kind, Generic);
        assert_eq!(Browser::from_command("/usr/local/bin/ELinks").kind, Elinks);
        assert_eq!(Browser::from_command("chromium-browser").kind, Chromium);
        assert_eq!(Browser::from_command("my-browser --new-tab").kind,
                   Background);
        assert_eq!(Browser::from_command("/opt/firefox/firefox").name,
                   "firefox");
    }

    #[test]
    fn browser_variable() {
        assert_eq!(Browser::from_browser_var("w3m:firefox").map(|b| b.kind),
                   Some(Generic));
        assert_eq!(Browser::from_browser_var(":firefox").map(|b| b.kind),
                   Some(Mozilla));
        assert_eq!(Browser::from_browser_var(""), None);
        assert_eq!(Browser::from_browser_var(" : "), None);
    }
}
