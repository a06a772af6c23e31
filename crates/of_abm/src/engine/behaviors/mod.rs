//! Role-specific decision policies
//!
//! One module per role (GK, DEF, MID, FWD). Each exposes a `decide`
//! function, a belief schema and a static [`RoleSpec`] with the role's goals,
//! plans and liveness/safety properties. Dispatch happens by matching on
//! [`Role`].

pub mod defender;
pub mod forward;
pub mod goalkeeper;
pub mod midfielder;

pub use defender::CentreBackBeliefs;
pub use forward::StrikerBeliefs;
pub use goalkeeper::GoalkeeperBeliefs;
pub use midfielder::MidfielderBeliefs;

use crate::engine::agent::Role;

/// Declarative role metadata. Never evaluated at runtime.
#[derive(Debug)]
pub struct RoleSpec {
    pub goals: &'static [&'static str],
    /// (plan family, actions)
    pub plans: &'static [(&'static str, &'static [&'static str])],
    pub liveness: &'static [&'static str],
    pub safety: &'static [&'static str],
}

pub fn spec_for(role: Role) -> &'static RoleSpec {
    match role {
        Role::Goalkeeper => &goalkeeper::SPEC,
        Role::CentreBack => &defender::SPEC,
        Role::Midfielder => &midfielder::SPEC,
        Role::Striker => &forward::SPEC,
    }
}

/// Per-role belief schema.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleBeliefs {
    Goalkeeper(GoalkeeperBeliefs),
    CentreBack(CentreBackBeliefs),
    Midfielder(MidfielderBeliefs),
    Striker(StrikerBeliefs),
}

impl RoleBeliefs {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Goalkeeper => RoleBeliefs::Goalkeeper(GoalkeeperBeliefs::default()),
            Role::CentreBack => RoleBeliefs::CentreBack(CentreBackBeliefs::default()),
            Role::Midfielder => RoleBeliefs::Midfielder(MidfielderBeliefs::default()),
            Role::Striker => RoleBeliefs::Striker(StrikerBeliefs::default()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            RoleBeliefs::Goalkeeper(_) => Role::Goalkeeper,
            RoleBeliefs::CentreBack(_) => Role::CentreBack,
            RoleBeliefs::Midfielder(_) => Role::Midfielder,
            RoleBeliefs::Striker(_) => Role::Striker,
        }
    }
}
