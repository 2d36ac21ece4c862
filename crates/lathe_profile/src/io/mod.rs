pub mod text;

pub use text::{format_point, load_profile, parse_profile};
