use super::*;

fn payload(item_id: i64) -> BookingPayload {
    let now = Utc::now().naive_utc();
    BookingPayload {
        item_id,
        start: now + Duration::days(1),
        end: now + Duration::days(2),
    }
}

/// Tests the happy path of booking creation.
///
/// Verifies that the booking comes back in WAITING status with the item and
/// booker fully populated.
///
/// Expected: Ok with an enriched WAITING booking
#[tokio::test]
async fn creates_waiting_booking_with_enriched_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let booking = BookingService::new(db).add(booker.id, payload(item.id)).await?;

    assert!(booking.id > 0);
    assert_eq!(booking.status, "WAITING");
    assert_eq!(booking.item.id, item.id);
    assert_eq!(booking.item.name, item.name);
    assert_eq!(booking.booker.id, booker.id);
    assert_eq!(booking.booker.email, booker.email);

    Ok(())
}

/// Tests creation against a nonexistent item.
///
/// Expected: Err(ItemNotFound)
#[tokio::test]
async fn fails_when_item_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booker = factory::user::create_user(db).await?;

    let result = BookingService::new(db).add(booker.id, payload(999)).await;

    assert!(matches!(result, Err(AppError::ItemNotFound(_))));

    Ok(())
}

/// Tests creation against an unavailable item.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn fails_when_item_is_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let item = factory::item::ItemFactory::new(db, owner.id)
        .available(false)
        .build()
        .await?;
    let booker = factory::user::create_user(db).await?;

    let result = BookingService::new(db).add(booker.id, payload(item.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creation by a nonexistent booker.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_when_booker_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let result = BookingService::new(db).add(999, payload(item.id)).await;

    assert!(matches!(result, Err(AppError::UserNotFound(_))));

    Ok(())
}

/// Tests an owner trying to book their own item.
///
/// The conflict is reported through the not-found family, matching the rest
/// of the booking visibility rules.
///
/// Expected: Err(BookingOwnershipViolation)
#[tokio::test]
async fn fails_when_booker_owns_the_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let result = BookingService::new(db).add(owner.id, payload(item.id)).await;

    assert!(matches!(result, Err(AppError::BookingOwnershipViolation(_))));

    Ok(())
}
