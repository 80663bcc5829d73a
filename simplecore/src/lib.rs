//! simplecore — shared library for the simple calculator

pub mod logging;
pub mod safety;
pub mod theme;
pub mod widgets;

pub use theme::CalcTheme;
