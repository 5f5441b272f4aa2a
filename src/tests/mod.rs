mod compare_tests;
mod utils;
