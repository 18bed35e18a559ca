//! Report rendering for Prism analysis bundles.
//!
//! Pages are self-contained HTML (inline CSS, escaped text) with embedded
//! chart divs; the consolidated document also renders as Markdown and the
//! whole bundle as JSON. `site::assemble` lays everything out as a static
//! site: an index page linking one page per analysis area plus the CSV
//! tables.

pub mod charts;
pub mod formats;
pub mod html;
pub mod markdown;
pub mod site;
pub mod tables;

pub use formats::{available_formats, create_reporter, Reporter};
