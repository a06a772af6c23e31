//! Formation templates
//!
//! A template lists slot tags with their base positions for the home side
//! (attacking toward x = 100). The away side uses the same table mirrored
//! in x. Templates are plain data and can be loaded from JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::types::{Position, TeamSide};
use crate::error::{Result, SimError};

pub const DEFAULT_FORMATION: &str = "4-4-2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    /// Slot tag, e.g. `CB_L`. Determines the role.
    pub tag: String,
    pub x: f64,
    pub y: f64,
}

impl FormationSlot {
    pub fn new(tag: &str, x: f64, y: f64) -> Self {
        Self { tag: tag.to_string(), x, y }
    }

    /// Base position for `side`.
    pub fn position_for(&self, side: TeamSide) -> Position {
        let home = Position::new(self.x, self.y);
        match side {
            TeamSide::Home => home,
            TeamSide::Away => home.mirrored(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationTemplate {
    pub name: String,
    /// In agent iteration order
    pub slots: Vec<FormationSlot>,
}

impl FormationTemplate {
    pub fn t442() -> Self {
        Self {
            name: "4-4-2".to_string(),
            slots: vec![
                FormationSlot::new("GK", 5.0, 50.0),
                FormationSlot::new("CB_L", 20.0, 30.0),
                FormationSlot::new("CB_R", 20.0, 70.0),
                FormationSlot::new("LB", 15.0, 10.0),
                FormationSlot::new("RB", 15.0, 90.0),
                FormationSlot::new("CM_L", 50.0, 35.0),
                FormationSlot::new("CM_R", 50.0, 65.0),
                FormationSlot::new("LW", 70.0, 20.0),
                FormationSlot::new("RW", 70.0, 80.0),
                FormationSlot::new("ST1", 85.0, 40.0),
                FormationSlot::new("ST2", 85.0, 60.0),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Named templates available to team construction.
#[derive(Debug, Clone)]
pub struct FormationRegistry {
    templates: HashMap<String, FormationTemplate>,
}

impl FormationRegistry {
    pub fn empty() -> Self {
        Self { templates: HashMap::new() }
    }

    /// Replaces any template with the same name.
    pub fn register(&mut self, template: FormationTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Result<&FormationTemplate> {
        self.templates.get(name).ok_or_else(|| SimError::UnknownFormation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl Default for FormationRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(FormationTemplate::t442());
        registry
    }
}
