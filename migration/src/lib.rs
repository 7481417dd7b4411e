pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_user_table;
mod m20260712_000002_create_camp_table;
mod m20260712_000003_create_registration_table;
mod m20260713_000004_create_feedback_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_user_table::Migration),
            Box::new(m20260712_000002_create_camp_table::Migration),
            Box::new(m20260712_000003_create_registration_table::Migration),
            Box::new(m20260713_000004_create_feedback_table::Migration),
        ]
    }
}
