pub mod ast;
pub mod check;
pub mod generate;
pub mod input_loader;
pub mod run_common;
