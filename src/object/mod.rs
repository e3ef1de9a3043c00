//! Object, path and lens functions over [`Value`](crate::value::Value).
//!
//! These mirror Ramda's object functions on plain JavaScript values:
//! missing properties read as `undefined`, every update returns a fresh
//! copy, and non-object inputs are viewed as objects where that makes
//! sense (arrays by index, primitives as `{}`).
//!
//! Keys and paths are accepted in any form that converts into
//! [`PathSegment`](crate::value::PathSegment) or [`Path`](crate::value::Path):
//! `"a.b.0"`, `["a", "b"]`, or a prebuilt path.
//!
//! # Examples
//!
//! ```rust
//! use rambars::object::{assoc_path, path_or, pick};
//! use rambars::value;
//! use rambars::value::Value;
//!
//! let config = value!({ "server": { "port": 8080 }, "debug": true });
//!
//! let port = path_or(&Value::from(80), "server.port", &config);
//! assert_eq!(port, Value::from(8080));
//!
//! let tls = assoc_path("server.tls.enabled", value!(true), &config);
//! assert_eq!(pick("server", &tls), value!({ "server": { "port": 8080, "tls": { "enabled": true } } }));
//! ```

mod access;
mod lens;
mod query;
mod update;

pub use access::{
    clone, eq_props, from_pairs, has, has_path, keys, path, path_eq, path_or, paths, prop,
    prop_eq, prop_is, prop_or, props, to_pairs, to_string, values,
};
pub use lens::{
    ComposedLens, FunctionLens, IndexLens, Lens, PathLens, PropLens, lens, lens_index, lens_path,
    lens_prop, over, set, view,
};
pub use query::{Condition, apply_spec, pluck, where_, where_eq};
pub use update::{
    MAX_ARRAY_PADDING, PropList, assoc, assoc_path, dissoc, merge, merge_all, merge_deep_right,
    merge_left, obj_of, omit, pick, pick_all, zip_obj,
};

pub use crate::value::type_of;
