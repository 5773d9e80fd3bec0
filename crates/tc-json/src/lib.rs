//! `tc-json` — the JSON face of the transit index.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`input`]    | `BaseDocument` (build mode), `StatDocument` (serve mode)     |
//! | [`builder`]  | `ResponseBuilder`: balanced, key-before-value JSON assembly  |
//! | [`requests`] | catalogue loading, index building, stat-request answering    |
//! | [`error`]    | `JsonError`, `JsonResult<T>`                                 |

pub mod builder;
pub mod error;
pub mod input;
pub mod requests;


pub use builder::{BuilderState, ResponseBuilder};
pub use error::{JsonError, JsonResult};
pub use input::{
    BaseDocument, BaseRequest, BusRequest, SerializationSettings, StatDocument, StatRequest,
    StopRequest,
};
pub use requests::{build_index, load_catalogue, process_stat_requests, write_responses};
