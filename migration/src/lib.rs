pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_projects_table;
mod m20250601_000002_create_pricing_plans_table;
mod m20250601_000003_create_services_table;
mod m20250601_000004_create_resume_tables;
mod m20250601_000005_create_singleton_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_projects_table::Migration),
            Box::new(m20250601_000002_create_pricing_plans_table::Migration),
            Box::new(m20250601_000003_create_services_table::Migration),
            Box::new(m20250601_000004_create_resume_tables::Migration),
            Box::new(m20250601_000005_create_singleton_tables::Migration),
        ]
    }
}
