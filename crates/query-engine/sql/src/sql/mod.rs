//! A small relational query-building engine: AST, fluent builder and SQL rendering.

pub mod ast;
pub mod builder;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
