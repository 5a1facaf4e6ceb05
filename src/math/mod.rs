pub mod checker;
pub mod color_parse;
pub mod hex;
pub mod named;
pub mod search;
pub mod wcag;
