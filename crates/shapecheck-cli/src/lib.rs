//! Library side of the `shapecheck` binary: input documents and the
//! commands that turn them into check reports.

pub mod commands;
pub mod input;
