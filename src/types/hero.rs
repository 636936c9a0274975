use entity::hero_power::Strength;
use serde::{Deserialize, Serialize};

use crate::types::power::PowerRes;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroRes {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl From<entity::hero::Model> for HeroRes {
    fn from(m: entity::hero::Model) -> Self {
        HeroRes {
            id: m.id,
            name: m.name,
            super_name: m.super_name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroPowerDetail {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
    pub power: PowerRes,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroDetailRes {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerDetail>,
}
