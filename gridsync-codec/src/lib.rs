//! JSON wire codec for gridsync layouts.
//!
//! The wire format follows the client grid library's conventions: item ids
//! travel as `"i"`, optional bounds are omitted when unset, and the static
//! flag is spelled `"static"`.
//!
//! ```text
//! {
//!   "revision": 7, "columns": 12, "rowHeight": 30,
//!   "compact": true, "compactType": "vertical",
//!   "items": [ { "i": "chart", "x": 0, "y": 0, "w": 4, "h": 3,
//!                "minW": 2, "static": false,
//!                "isDraggable": true, "isResizable": true } ]
//! }
//! ```
//!
//! Decoding is all-or-nothing: one malformed item fails the whole call and
//! the target model is left untouched.

mod codec;
mod error;
mod wire;

pub use codec::{LayoutCodec, MergeOutcome};
pub use error::{CodecError, CodecResult};
pub use wire::WireItem;
