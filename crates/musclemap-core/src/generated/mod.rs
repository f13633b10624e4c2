pub mod body_paths;
