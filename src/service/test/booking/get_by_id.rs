use super::*;

/// Tests visibility for the booker and the item owner.
///
/// Expected: Ok for both parties
#[tokio::test]
async fn visible_to_booker_and_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = factory::helpers::create_booking_parties(db).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;

    let service = BookingService::new(db);

    let seen_by_booker = service.get_by_id(booker.id, booking.id).await?;
    assert_eq!(seen_by_booker.id, booking.id);

    let seen_by_owner = service.get_by_id(owner.id, booking.id).await?;
    assert_eq!(seen_by_owner.id, booking.id);

    Ok(())
}

/// Tests that any other user gets the not-found error.
///
/// Expected: Err(BookingNotFound) for a stranger
#[tokio::test]
async fn hidden_from_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;

    let result = BookingService::new(db).get_by_id(stranger.id, booking.id).await;

    assert!(matches!(result, Err(AppError::BookingNotFound(_))));

    Ok(())
}

/// Tests fetching a nonexistent booking.
///
/// Expected: Err(BookingNotFound)
#[tokio::test]
async fn fails_when_booking_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = BookingService::new(db).get_by_id(user.id, 999).await;

    assert!(matches!(result, Err(AppError::BookingNotFound(_))));

    Ok(())
}
