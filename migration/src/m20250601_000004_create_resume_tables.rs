use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

fn timestamp_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn order_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResumeExperiences::Table)
                    .if_not_exists()
                    .col(id_column(ResumeExperiences::Id))
                    .col(ColumnDef::new(ResumeExperiences::Title).string_len(200).not_null())
                    .col(ColumnDef::new(ResumeExperiences::Company).string_len(200).not_null())
                    .col(ColumnDef::new(ResumeExperiences::Period).string_len(100).not_null())
                    .col(ColumnDef::new(ResumeExperiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(ResumeExperiences::Achievements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(order_column(ResumeExperiences::SortOrder))
                    .col(timestamp_column(ResumeExperiences::CreatedAt))
                    .col(timestamp_column(ResumeExperiences::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResumeEducation::Table)
                    .if_not_exists()
                    .col(id_column(ResumeEducation::Id))
                    .col(ColumnDef::new(ResumeEducation::Degree).string_len(200).not_null())
                    .col(ColumnDef::new(ResumeEducation::School).string_len(200).not_null())
                    .col(ColumnDef::new(ResumeEducation::Period).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ResumeEducation::Achievements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(order_column(ResumeEducation::SortOrder))
                    .col(timestamp_column(ResumeEducation::CreatedAt))
                    .col(timestamp_column(ResumeEducation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResumeSkills::Table)
                    .if_not_exists()
                    .col(id_column(ResumeSkills::Id))
                    .col(ColumnDef::new(ResumeSkills::Category).string_len(150).not_null())
                    .col(ColumnDef::new(ResumeSkills::Items).json_binary().not_null())
                    .col(order_column(ResumeSkills::SortOrder))
                    .col(timestamp_column(ResumeSkills::CreatedAt))
                    .col(timestamp_column(ResumeSkills::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResumeCertifications::Table)
                    .if_not_exists()
                    .col(id_column(ResumeCertifications::Id))
                    .col(ColumnDef::new(ResumeCertifications::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(ResumeCertifications::Issuer)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ResumeCertifications::IssuedOn)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ResumeCertifications::PdfUrl)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(order_column(ResumeCertifications::SortOrder))
                    .col(timestamp_column(ResumeCertifications::CreatedAt))
                    .col(timestamp_column(ResumeCertifications::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResumeCertifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeEducation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeExperiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResumeExperiences {
    Table,
    Id,
    Title,
    Company,
    Period,
    Description,
    Achievements,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResumeEducation {
    Table,
    Id,
    Degree,
    School,
    Period,
    Achievements,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResumeSkills {
    Table,
    Id,
    Category,
    Items,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResumeCertifications {
    Table,
    Id,
    Name,
    Issuer,
    IssuedOn,
    PdfUrl,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
