use super::*;

/// Tests the enriched view for the owner.
///
/// The owner sees the most recently ended booking as last and the nearest
/// upcoming one as next, with comments and their author names resolved.
///
/// Expected: Ok with last/next populated and the comment present
#[tokio::test]
async fn owner_sees_last_and_next_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let past = BookingFactory::new(db, item.id, booker.id)
        .in_past()
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let future = factory::booking::create_booking(db, item.id, booker.id).await?;
    CommentFactory::new(db, item.id, booker.id)
        .text("Worked great")
        .build()
        .await?;

    let view = ItemService::new(db).get_by_id(owner.id, item.id).await?;

    assert_eq!(view.id, item.id);
    assert_eq!(view.owner.id, owner.id);
    assert_eq!(view.last_booking.as_ref().unwrap().id, past.id);
    assert_eq!(view.last_booking.as_ref().unwrap().booker_id, booker.id);
    assert_eq!(view.next_booking.as_ref().unwrap().id, future.id);
    assert_eq!(view.comments.len(), 1);
    assert_eq!(view.comments[0].text, "Worked great");
    assert_eq!(view.comments[0].author_name, booker.name);

    Ok(())
}

/// Tests the view for a non-owner.
///
/// Booking data is hidden from everyone but the owner; comments stay
/// visible.
///
/// Expected: Ok with last/next empty and comments present
#[tokio::test]
async fn non_owner_sees_no_booking_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    BookingFactory::new(db, item.id, booker.id)
        .in_past()
        .status(BookingStatus::Approved)
        .build()
        .await?;
    CommentFactory::new(db, item.id, booker.id).build().await?;

    let view = ItemService::new(db).get_by_id(booker.id, item.id).await?;

    assert!(view.last_booking.is_none());
    assert!(view.next_booking.is_none());
    assert_eq!(view.comments.len(), 1);

    Ok(())
}

/// Tests fetching a nonexistent item.
///
/// Expected: Err(ItemNotFound)
#[tokio::test]
async fn fails_when_item_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = ItemService::new(db).get_by_id(user.id, 999).await;

    assert!(matches!(result, Err(AppError::ItemNotFound(_))));

    Ok(())
}
