use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricingPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PricingPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PricingPlans::Name).string_len(150).not_null())
                    // USD only; conversion happens at display time
                    .col(ColumnDef::new(PricingPlans::Price).double().not_null())
                    .col(
                        ColumnDef::new(PricingPlans::Period)
                            .string_len(20)
                            .not_null()
                            .default("project"),
                    )
                    .col(
                        ColumnDef::new(PricingPlans::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(PricingPlans::Features).json_binary().not_null())
                    .col(
                        ColumnDef::new(PricingPlans::Popular)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PricingPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PricingPlans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(PricingPlans::Price).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PricingPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PricingPlans {
    Table,
    Id,
    Name,
    Price,
    Period,
    Description,
    Features,
    Popular,
    CreatedAt,
    UpdatedAt,
}
