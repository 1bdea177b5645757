use super::*;

use test_utils::factory::booking::BookingFactory;

/// Tests the CURRENT, PAST, and FUTURE filters on the owner side.
///
/// Verifies that each time filter selects exactly its partition of the
/// owner's bookings relative to the probe instant.
///
/// Expected: Ok with one booking per time filter
#[tokio::test]
async fn partitions_owner_bookings_by_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let past = BookingFactory::new(db, item.id, booker.id).in_past().build().await?;
    let current = BookingFactory::new(db, item.id, booker.id).current().build().await?;
    let future = factory::booking::create_booking(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now().naive_utc();
    let page = Page::new(0, 10);

    let found = repo.find_current_by_owner_id(owner.id, now, page).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, current.id);

    let found = repo.find_past_by_owner_id(owner.id, now, page).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, past.id);

    let found = repo.find_future_by_owner_id(owner.id, now, page).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, future.id);

    Ok(())
}
