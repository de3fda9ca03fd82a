mod declarations_tests;
mod unclosed_tests;
