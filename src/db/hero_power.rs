use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    hero_power::{HeroPowerCreateRes, RHeroPowerCreate},
};
use entity::hero::Entity as Hero;
use entity::hero_power::{ActiveModel as HeroPowerActive, Entity as HeroPower, Strength};
use entity::power::Entity as Power;
use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};

impl DatabaseService {
    pub async fn count_hero_powers(&self) -> Result<u64, AppError> {
        Ok(HeroPower::find().count(&self.database_connection).await?)
    }

    /// Links a hero to a power.
    ///
    /// Every constraint is checked inside the transaction before the insert:
    /// the strength must be one of the known values and both parents must
    /// exist. Any failure rolls back and surfaces as `Validation`.
    pub async fn create_hero_power(
        &self,
        payload: RHeroPowerCreate,
    ) -> Result<HeroPowerCreateRes, AppError> {
        let txn = self.database_connection.begin().await?;

        match Self::insert_hero_power(&txn, payload).await {
            Ok(created) => {
                txn.commit().await.map_err(|e| AppError::from(e).into_validation())?;
                Ok(created)
            }
            Err(err) => Err(Self::abort(txn, err).await),
        }
    }

    async fn insert_hero_power(
        txn: &DatabaseTransaction,
        payload: RHeroPowerCreate,
    ) -> Result<HeroPowerCreateRes, AppError> {
        let strength = payload
            .strength
            .parse::<Strength>()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hero = Hero::find_by_id(payload.hero_id)
            .one(txn)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("hero {} does not exist", payload.hero_id))
            })?;
        let power = Power::find_by_id(payload.power_id)
            .one(txn)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("power {} does not exist", payload.power_id))
            })?;

        let created = HeroPowerActive {
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Ok(HeroPowerCreateRes {
            id: created.id,
            hero_id: created.hero_id,
            power_id: created.power_id,
            strength: created.strength,
            hero: hero.into(),
            power: power.into(),
        })
    }
}
