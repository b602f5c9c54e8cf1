pub mod formatter;

pub use formatter::{
    format_limits, format_stars, format_summary, format_summary_json, should_use_colors, Summary,
};
