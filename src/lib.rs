//! The `nonosolve` solves black-and-white nonograms with the line constraint propagation.

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
// some crates are only used in binary (see `main.rs`), not in the lib itself
#![allow(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]
//
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub use self::{
    block::{BinaryBlock, BinaryColor, Description},
    board::{Board, LineDirection, LinePosition},
    parser::{BoardParser, LocalReader, ParseError, PlainFormat},
    render::ShellRenderer,
    solver::{
        line::{deduce, feasible, DynamicSolver, HypothesisSolver, LineSolver, UnsolvableLine},
        propagation::{solve_line, Outcome, Solver as PropagationSolver},
        run, solve,
    },
};

#[cfg(feature = "ini")]
pub use self::parser::TomlFormat;

pub mod block;
pub mod board;
pub mod parser;
pub mod render;
pub mod solver;
pub mod utils;
