pub mod args;

pub use args::{
    parse_categorical_filter, parse_date_range, parse_group_field, parse_sort, ValidationError,
};
