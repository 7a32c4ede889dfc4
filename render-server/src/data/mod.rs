pub mod post_repository;
pub mod remote_repository;
pub mod seed;
