// crates/of_abm/src/tactics/mod.rs
// Formation templates used for team construction

pub mod formation;

pub use formation::{FormationRegistry, FormationSlot, FormationTemplate, DEFAULT_FORMATION};
