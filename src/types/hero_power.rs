use entity::hero_power::Strength;
use serde::{Deserialize, Serialize};

use crate::types::{hero::HeroRes, power::PowerRes};

/// POST body. `strength` stays a raw string so the data layer owns the check.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RHeroPowerCreate {
    pub strength: String,
    pub power_id: i32,
    pub hero_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroPowerCreateRes {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
    pub hero: HeroRes,
    pub power: PowerRes,
}
