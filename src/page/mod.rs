mod terminal;

pub use terminal::TerminalPage;

use std::fmt::Debug;

/// The user-facing surface the updater reports to.
pub trait Page: Debug + Send + Sync {
    /// Shows a message the user has to acknowledge.
    fn alert(&self, message: &str);

    /// Replaces the contents of the location display region.
    fn render_location(&self, markup: &str);
}
