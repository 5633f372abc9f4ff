//! Interactive mzML browser: a clickable TIC plot over a spectrum view.

pub mod app;
pub mod data;
pub mod state;
pub mod ui;
