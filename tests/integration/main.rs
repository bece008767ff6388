mod config_file;
mod error_handling;
mod fs_abstraction;
