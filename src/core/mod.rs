pub mod convert;
pub mod detect;
pub mod pairs;
pub mod split;
pub mod strip;
pub mod tokenize;

pub use convert::{parse_ordinate, to_coordinates};
pub use detect::{Delimiter, is_geometry_like, is_multi_part, keyword, plain_delimiter};
pub use pairs::{OrdinatePair, build_group_pairs, build_pairs};
pub use split::split_parts;
pub use strip::strip_to_body;
pub use tokenize::{plain_groups, token_groups, tokenize, tokenize_plain};
