mod aggregation;
mod html;

pub use aggregation::{
    dense_rank_desc, format_compact, format_thousands, group_by, mean, rate,
};
pub use html::html_escape;
