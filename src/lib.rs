//! quizforge - a terminal drill generator for trade-skills study
//!
//! quizforge turns a comma-separated list of concepts into a randomized set
//! of question/answer-hint pairs drawn from a levelled template bank, with
//! one-shot CLI output or an interactive TUI, and copy-to-clipboard of the
//! rendered set.

pub mod app;
pub mod bank;
pub mod clipboard;
pub mod config;
pub mod form;
pub mod generate;
pub mod render;
pub mod theme;
pub mod ui;

pub use app::App;
pub use bank::{bank, Level, TemplateBank};
pub use config::Config;
pub use generate::GeneratedQa;
