//! Search result records and their display-ready views.
//!
//! This module defines [`RawResult`] (what the pipeline delivers),
//! [`ResultView`] (what the presentation layer renders), and the
//! [`ResultViewModelBuilder`] that maps one to the other.

mod builder;
mod types;

pub use builder::ResultViewModelBuilder;
pub use types::{RawResult, ResultView};
