use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use entity::hero_power::Entity as HeroPower;
use entity::power::{ActiveModel as PowerActive, Entity as Power, Model as PowerModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

pub const POWER_NOT_FOUND: &str = "Power not found";
/// Matches the `powers.description` column width.
pub const MAX_DESCRIPTION_LEN: usize = 255;

impl DatabaseService {
    pub async fn list_powers(&self) -> Result<Vec<PowerModel>, AppError> {
        Ok(Power::find()
            .order_by_asc(entity::power::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_power(&self, id: i32) -> Result<PowerModel, AppError> {
        Power::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound(POWER_NOT_FOUND))
    }

    /// Replaces a power's description.
    ///
    /// Lookup, validation and write share one transaction. A missing power is
    /// `NotFound`; a missing, blank or over-long description, or any failure
    /// while writing, rolls back and becomes `Validation`.
    pub async fn update_power_description(
        &self,
        id: i32,
        description: Option<String>,
    ) -> Result<PowerModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let Some(power) = Power::find_by_id(id).one(&txn).await? else {
            return Err(Self::abort(txn, AppError::NotFound(POWER_NOT_FOUND)).await);
        };

        let description = match description {
            Some(d) if d.trim().is_empty() => {
                let err = AppError::Validation("description must not be blank".into());
                return Err(Self::abort(txn, err).await);
            }
            Some(d) if d.chars().count() > MAX_DESCRIPTION_LEN => {
                let err = AppError::Validation(format!(
                    "description longer than {} characters",
                    MAX_DESCRIPTION_LEN
                ));
                return Err(Self::abort(txn, err).await);
            }
            Some(d) => d,
            None => {
                let err = AppError::Validation("description is required".into());
                return Err(Self::abort(txn, err).await);
            }
        };

        let mut am: PowerActive = power.into();
        am.description = Set(description);

        let updated = match am.update(&txn).await {
            Ok(updated) => updated,
            Err(err) => return Err(Self::abort(txn, err.into()).await),
        };

        txn.commit().await.map_err(|e| AppError::from(e).into_validation())?;
        Ok(updated)
    }

    /// Deletes a power and its hero_powers in one transaction.
    pub async fn delete_power(&self, id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let Some(power) = Power::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound(POWER_NOT_FOUND));
        };

        HeroPower::delete_many()
            .filter(entity::hero_power::Column::PowerId.eq(power.id))
            .exec(&txn)
            .await?;
        power.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
