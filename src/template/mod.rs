//! Reply templates and variable substitution

mod data;
mod renderer;

pub use data::{ReplyTemplate, ReplyTemplateItem};
pub use renderer::{render, render_template, format_amount};
