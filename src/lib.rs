//! Turn an indented ASCII tree into directories and empty files.
//!
//! ```text
//! project/       # comments start with '#'
//!     ├──src/    # directories end with '/'
//!     │   └──main.rs
//!     └──README.md
//! ```
//!
//! Each line is parsed on its own by [`parser::parse_line`], resolved against an
//! [`ancestry::AncestryStack`] into a [`vfs::VirtualFS`], and created on disk in input order
//! by [`materialize::apply_vfs`].

pub mod ancestry;
pub mod api;
pub mod config;
pub mod errors;
pub mod materialize;
pub mod parser;
pub mod preview;
pub mod prompt;
pub mod vfs;

pub use api::{
    create_tree, create_tree_from_file, CotreeError, Outcome, Settings, EXAMPLE_STRUCTURE,
};
pub use materialize::Summary;
