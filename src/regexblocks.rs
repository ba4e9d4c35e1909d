//! Main module for regexblocks library functionality

pub mod compiling;
pub mod formats;
pub mod lexing;
pub mod matching;
pub mod sequence;
pub mod testing;
pub mod units;
