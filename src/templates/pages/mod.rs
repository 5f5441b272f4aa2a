pub mod compare;

pub use compare::{compare_page, CompareVm};
