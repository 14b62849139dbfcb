//! Repository traits (ports)

pub mod link_repository;
pub mod session_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;
