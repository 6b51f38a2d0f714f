//! tabledeck — turn uploaded tabular data into paginated slide-deck tables.
//!
//! The crate covers the data side of the pipeline: parsing CSV or JSON
//! uploads into a canonical row/column model, column reordering and styling
//! state, pagination into per-slide pages, output size estimation, and
//! size-bounded splitting across multiple files. Encoding the actual deck
//! artifact is delegated to a [`DeckRenderer`] implementation supplied by
//! the host.
//!
//! ```ignore
//! let mut session = TableSession::new();
//! session.load_str("name,score\nAda,95\nGrace,90", Format::Csv)?;
//! session.columns_mut().set_align("score", Align::Right);
//!
//! let options = form.normalize();
//! let summary = export_deck(
//!     &session,
//!     &options,
//!     ExportMode::Full,
//!     &mut renderer,
//!     &mut progress,
//! )
//! .await?;
//! ```

pub mod constants;
pub mod data;
pub mod error;
pub mod export;
pub mod render;
pub mod session;
pub mod types;

pub use data::Format;
pub use error::{DeckError, DeckResult, FormatError, ValidationError};
pub use export::options::{ExportForm, ExportOptions};
pub use export::{deck_file_name, export_deck, ExportMode, ExportSummary};
pub use render::{
    DeckRenderer, DeckRequest, NullProgress, ProgressSink, SlideSpec, StyledCell, TableFrame,
};
pub use session::{LoadSummary, TableSession};
pub use types::{Align, ColumnSet, ColumnSpec, Row, Table, VAlign};
