use super::*;

use crate::data::booking::NewBooking;

/// Tests creating a booking.
///
/// Verifies that the repository persists the given interval and references
/// and always assigns the `Waiting` status.
///
/// Expected: Ok with a WAITING booking
#[tokio::test]
async fn creates_booking_in_waiting_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let now = Utc::now().naive_utc();
    let start = now + Duration::days(1);
    let end = now + Duration::days(3);

    let booking = BookingRepository::new(db)
        .create(NewBooking {
            start,
            end,
            item_id: item.id,
            booker_id: booker.id,
        })
        .await?;

    assert!(booking.id > 0);
    assert_eq!(booking.start, start);
    assert_eq!(booking.end, end);
    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.booker_id, booker.id);
    assert_eq!(booking.status, BookingStatus::Waiting);

    Ok(())
}
