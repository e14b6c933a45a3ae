pub mod string_utils;
pub mod display_terminal;
pub mod password;
