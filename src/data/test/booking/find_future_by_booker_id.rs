use super::*;

use test_utils::factory::booking::BookingFactory;

/// Tests the FUTURE filter.
///
/// Verifies that only bookings starting strictly after "now" are returned.
///
/// Expected: Ok with only the upcoming booking
#[tokio::test]
async fn returns_only_upcoming_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let future = factory::booking::create_booking(db, item.id, booker.id).await?;
    BookingFactory::new(db, item.id, booker.id).current().build().await?;
    BookingFactory::new(db, item.id, booker.id).in_past().build().await?;

    let bookings = BookingRepository::new(db)
        .find_future_by_booker_id(booker.id, Utc::now().naive_utc(), Page::new(0, 10))
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, future.id);

    Ok(())
}
