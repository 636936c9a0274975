use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    hero::{HeroDetailRes, HeroPowerDetail},
};
use entity::hero::{Entity as Hero, Model as HeroModel};
use entity::hero_power::Entity as HeroPower;
use entity::power::Entity as Power;
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

pub const HERO_NOT_FOUND: &str = "Hero not found";

impl DatabaseService {
    pub async fn list_heroes(&self) -> Result<Vec<HeroModel>, AppError> {
        Ok(Hero::find()
            .order_by_asc(entity::hero::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_hero(&self, id: i32) -> Result<HeroModel, AppError> {
        Hero::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound(HERO_NOT_FOUND))
    }

    /// Hero plus every association, each with its power inlined.
    pub async fn get_hero_detail(&self, id: i32) -> Result<HeroDetailRes, AppError> {
        let hero = self.get_hero(id).await?;

        let rows = HeroPower::find()
            .filter(entity::hero_power::Column::HeroId.eq(hero.id))
            .order_by_asc(entity::hero_power::Column::Id)
            .find_also_related(Power)
            .all(&self.database_connection)
            .await?;

        let mut hero_powers = Vec::with_capacity(rows.len());
        for (hp, power) in rows {
            // FK guarantees the power; a miss means the store is inconsistent
            let power = power.ok_or_else(|| {
                DbErr::RecordNotFound(format!("power {} for hero_power {}", hp.power_id, hp.id))
            })?;
            hero_powers.push(HeroPowerDetail {
                id: hp.id,
                hero_id: hp.hero_id,
                power_id: hp.power_id,
                strength: hp.strength,
                power: power.into(),
            });
        }

        Ok(HeroDetailRes {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers,
        })
    }

    /// Deletes a hero and its hero_powers in one transaction.
    pub async fn delete_hero(&self, id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let Some(hero) = Hero::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound(HERO_NOT_FOUND));
        };

        HeroPower::delete_many()
            .filter(entity::hero_power::Column::HeroId.eq(hero.id))
            .exec(&txn)
            .await?;
        hero.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
