use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single row keyed "details"
        manager
            .create_table(
                Table::create()
                    .table(ContactDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactDetails::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactDetails::Email).string_len(320).not_null())
                    .col(
                        ColumnDef::new(ContactDetails::Phone)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::Location)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::SocialLinks)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactDetails::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Single row keyed "current"
        manager
            .create_table(
                Table::create()
                    .table(SiteVersion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteVersion::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteVersion::Version).string_len(64).not_null())
                    .col(
                        ColumnDef::new(SiteVersion::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteVersion::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContactDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactDetails {
    Table,
    Id,
    Email,
    Phone,
    Location,
    SocialLinks,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SiteVersion {
    Table,
    Id,
    Version,
    LastUpdated,
}
