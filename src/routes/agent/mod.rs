mod add;
mod delete;
mod list;
mod patch;
mod update;

pub use add::*;
pub use delete::*;
pub use list::*;
pub use patch::*;
pub use update::*;

pub(crate) const QUERY_ERROR: &str = "Error executing query";
