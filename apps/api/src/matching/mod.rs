// Career matching: scoring, skills gap and learning roadmap.
// Narrative text for each step comes through the insights resolver.

pub mod gap;
pub mod handlers;
pub mod roadmap;
pub mod scorer;
