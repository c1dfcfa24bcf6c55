//! Text snapshots, spans and edit events

mod buffer;
mod change;
mod version;

pub use buffer::TextBuffer;
pub use change::{ChangeSpan, ContentTypeChange, TextChange};
pub use version::{SourceVersion, TextSpan, VersionId};
