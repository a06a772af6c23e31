//! Team construction from formation templates

use crate::engine::agent::{Agent, Role};
use crate::engine::types::TeamSide;
use crate::error::{Result, SimError};
use crate::tactics::FormationRegistry;

/// Build one side from a named template.
///
/// Agents come back in slot order with ids `{side}_{tag}_{slot index}`.
/// Any unknown slot tag fails the whole team; no partial team is returned.
pub fn build_team(side: TeamSide, formation: &str, registry: &FormationRegistry) -> Result<Vec<Agent>> {
    let template = registry.get(formation)?;

    template
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let role = Role::from_slot_tag(&slot.tag).ok_or_else(|| SimError::UnknownRoleTag {
                formation: template.name.clone(),
                tag: slot.tag.clone(),
            })?;
            let id = format!("{}_{}_{}", side, slot.tag, i);
            Ok(Agent::new(id, slot.tag.as_str(), role, side, slot.position_for(side)))
        })
        .collect()
}
