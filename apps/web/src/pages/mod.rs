// Server-rendered pages: contact (constant) and resume (from the profile document).
// Renderers are pure functions returning HTML strings; handlers wrap them in the shell.

pub mod contact;
pub mod handlers;
pub mod metadata;
pub mod resume;
pub mod shell;
