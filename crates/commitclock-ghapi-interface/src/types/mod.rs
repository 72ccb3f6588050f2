//! GitHub types.

mod commit;
mod gist;
mod repository;
mod user;

pub use commit::GhCommit;
pub use gist::{GhGist, GhGistFile};
pub use repository::GhRepository;
pub use user::{GhUser, GhViewer};
