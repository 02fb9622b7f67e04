//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories own all SQL;
//! nothing above this layer builds query strings.

pub mod category_repo;
pub mod product_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use product_repo::ProductRepo;
pub use user_repo::UserRepo;
