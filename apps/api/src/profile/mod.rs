// Profile intake: completion tracking, templated analysis and the form-facing handlers.

pub mod analysis;
pub mod completeness;
pub mod handlers;
