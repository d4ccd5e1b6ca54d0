//! Domain entities - the core business objects.

mod comment;
mod permission;
mod post;
mod user;

pub use comment::Comment;
pub use permission::Permission;
pub use post::Post;
pub use user::User;
