// ABOUTME: Library module for the lesson-deck program.
// ABOUTME: Contains the outline parser, slide paginator and deck renderers.

// Reexport modules
pub mod config;
pub mod errors;
pub mod history;
pub mod html;
pub mod outline;
pub mod paginate;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use errors::{DeckError, Result};
pub use history::{DeliveryType, History, HistoryEntry, LessonRequest};
pub use html::{generate_html, write_html_to_file};
pub use outline::{parse, Outline, Section};
pub use paginate::{paginate, Deck, Layout, PresentationMeta, SlideDescriptor, SlideKind};
pub use utils::strip_emphasis;

/// Parse raw lesson text and paginate it in one step
pub fn build_deck(raw: &str, meta: &PresentationMeta, layout: &Layout) -> Result<Deck> {
    // Validate before parsing so a bad layout never produces work
    layout.validate()?;
    let outline = parse(raw);
    paginate(&outline, meta, layout)
}
