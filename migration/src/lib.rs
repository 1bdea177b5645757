pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_users_table;
mod m20260815_000002_create_item_requests_table;
mod m20260815_000003_create_items_table;
mod m20260815_000004_create_bookings_table;
mod m20260815_000005_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_users_table::Migration),
            Box::new(m20260815_000002_create_item_requests_table::Migration),
            Box::new(m20260815_000003_create_items_table::Migration),
            Box::new(m20260815_000004_create_bookings_table::Migration),
            Box::new(m20260815_000005_create_comments_table::Migration),
        ]
    }
}
