pub mod form;
pub mod parse;
