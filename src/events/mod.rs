pub mod form;
pub mod keyboard;
pub mod pointer;
