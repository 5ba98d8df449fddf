mod create;
mod patch;
mod update;
mod value;

pub use create::CreateAgent as Create;
pub use patch::PatchAgent as Patch;
pub use patch::{Assignment, PatchPolicy};
pub use update::UpdateAgent as Update;
pub use value::{bind_text, is_falsy, sql_text};
