use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_hero_table::Hero;
use crate::m20240301_000002_create_power_table::Power;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum HeroPower {
    #[sea_orm(iden = "hero_powers")]
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline so SQLite gets them too (it can't ALTER TABLE ADD CONSTRAINT)
        m.create_table(
            Table::create()
                .table(HeroPower::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(HeroPower::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(HeroPower::Strength)
                        .string_len(20)
                        .not_null()
                        .check(
                            Expr::col(HeroPower::Strength).is_in(["Strong", "Weak", "Average"]),
                        ),
                )
                .col(ColumnDef::new(HeroPower::HeroId).integer().not_null())
                .col(ColumnDef::new(HeroPower::PowerId).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_hero_powers_hero")
                        .from(HeroPower::Table, HeroPower::HeroId)
                        .to(Hero::Table, Hero::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_hero_powers_power")
                        .from(HeroPower::Table, HeroPower::PowerId)
                        .to(Power::Table, Power::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_hero_powers_hero")
                .table(HeroPower::Table)
                .col(HeroPower::HeroId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_hero_powers_power")
                .table(HeroPower::Table)
                .col(HeroPower::PowerId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes implicitly with table
        m.drop_table(
            Table::drop()
                .table(HeroPower::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
