mod functions_tests;
mod prolog_tests;
mod types_tests;
