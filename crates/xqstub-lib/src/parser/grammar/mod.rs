//! Grammar productions for XQuery module prologs.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Expressions are never parsed: function bodies, variable initializers and the
//! query body are consumed as balanced token runs.

mod declarations;
mod names;
mod prolog;
mod types;
mod validation;
