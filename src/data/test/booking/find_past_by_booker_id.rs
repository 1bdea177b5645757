use super::*;

use test_utils::factory::booking::BookingFactory;

/// Tests the PAST filter.
///
/// Verifies that only bookings already ended are returned; an in-progress
/// booking whose end is still ahead does not count as past.
///
/// Expected: Ok with only the ended booking
#[tokio::test]
async fn returns_only_ended_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let past = BookingFactory::new(db, item.id, booker.id).in_past().build().await?;
    BookingFactory::new(db, item.id, booker.id).current().build().await?;
    factory::booking::create_booking(db, item.id, booker.id).await?;

    let bookings = BookingRepository::new(db)
        .find_past_by_booker_id(booker.id, Utc::now().naive_utc(), Page::new(0, 10))
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, past.id);

    Ok(())
}
