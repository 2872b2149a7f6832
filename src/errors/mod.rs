pub mod error_mapper;

pub use error_mapper::map_file_load_error;
