use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use entity::hero::{ActiveModel as HeroActive, Entity as Hero};
use entity::hero_power::{ActiveModel as HeroPowerActive, Entity as HeroPower, Strength};
use entity::power::{ActiveModel as PowerActive, Entity as Power};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use tracing::info;

/// (name, super_name)
pub const HEROES: [(&str, &str); 6] = [
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
];

/// (name, description)
pub const POWERS: [(&str, &str); 4] = [
    ("super strength", "gives the wielder super-human strengths"),
    ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
    ("super human senses", "allows the wielder to use her senses at a super-human level"),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// (index into HEROES, index into POWERS, strength)
pub const HERO_POWERS: [(usize, usize, Strength); 7] = [
    (0, 0, Strength::Strong),
    (0, 1, Strength::Average),
    (1, 0, Strength::Weak),
    (2, 2, Strength::Average),
    (3, 3, Strength::Strong),
    (4, 1, Strength::Average),
    (5, 0, Strength::Strong),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

impl DatabaseService {
    /// Wipes all three tables and loads the fixture dataset.
    pub async fn seed(&self) -> Result<SeedSummary, AppError> {
        let txn = self.database_connection.begin().await?;

        // children first so the FKs never dangle
        HeroPower::delete_many().exec(&txn).await?;
        Hero::delete_many().exec(&txn).await?;
        Power::delete_many().exec(&txn).await?;

        let mut hero_ids = Vec::with_capacity(HEROES.len());
        for (name, super_name) in HEROES {
            let hero = HeroActive {
                name: Set(name.to_string()),
                super_name: Set(super_name.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            hero_ids.push(hero.id);
        }

        let mut power_ids = Vec::with_capacity(POWERS.len());
        for (name, description) in POWERS {
            let power = PowerActive {
                name: Set(name.to_string()),
                description: Set(description.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            power_ids.push(power.id);
        }

        for (hero, power, strength) in HERO_POWERS {
            HeroPowerActive {
                strength: Set(strength),
                hero_id: Set(hero_ids[hero]),
                power_id: Set(power_ids[power]),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        info!(
            "Seeded {} heroes, {} powers, {} hero_powers",
            HEROES.len(),
            POWERS.len(),
            HERO_POWERS.len()
        );

        Ok(SeedSummary {
            heroes: HEROES.len(),
            powers: POWERS.len(),
            hero_powers: HERO_POWERS.len(),
        })
    }
}
