//! Flexible scalar codec.
//!
//! The Gengo API serialises the same logical field differently depending on
//! endpoint and API revision: integers arrive as `"5"` or `5` or `5.0`,
//! booleans as `true`, `"1"` or `1`, timestamps as epoch seconds or as a
//! database datetime string. Each wrapper here accepts every observed form
//! on decode and emits exactly one form on encode, so the resource types in
//! `crate::api` can declare plain semantic fields.
//!
//! # Wire forms
//! ```text
//! type      decode accepts                              encode emits
//! Float64   "12.3" | 12.3 | 12                          "12.30"
//! Int       "5" | 5 | 5.9 (truncated)                   "5"
//! Bool      true | "true" | "1" | 1 | 1.0               "1" / "0"
//! Time      1388534400 | "1388534400"                   1388534400
//!           | "2014-01-01 00:00:00.000000" (UTC)
//! ```
//!
//! Nullable fields are declared as `Option<T>`; `null` never decodes into a
//! sentinel value of the wrapper itself.

mod boolean;
mod float;
mod int;
mod time;

pub use boolean::Bool;
pub use float::Float64;
pub use int::Int;
pub use time::{Time, DATETIME_FORMAT};
