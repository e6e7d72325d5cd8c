pub mod element;
pub mod text;
