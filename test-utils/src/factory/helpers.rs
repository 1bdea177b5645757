//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner together with an available item.
///
/// # Returns
/// - `Ok((owner, item))` - Created user and item entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::ItemFactory::new(db, owner.id).build().await?;

    Ok((owner, item))
}

/// Creates the full cast for a booking scenario: an owner, their item, and a
/// separate booker.
///
/// # Returns
/// - `Ok((owner, item, booker))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_parties(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model, entity::user::Model), DbErr> {
    let (owner, item) = create_item_with_owner(db).await?;
    let booker = crate::factory::user::create_user(db).await?;

    Ok((owner, item, booker))
}
