// Domain services

pub mod case_directory;
