use super::*;

fn payload(text: &str) -> CommentPayload {
    CommentPayload {
        text: Some(text.to_string()),
    }
}

/// Tests commenting after a finished booking.
///
/// Expected: Ok with the author's name resolved
#[tokio::test]
async fn finished_booking_allows_commenting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .in_past()
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let comment = ItemService::new(db)
        .add_comment(booker.id, item.id, payload("Sturdy and sharp"))
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.text, "Sturdy and sharp");
    assert_eq!(comment.item_id, item.id);
    assert_eq!(comment.author_name, booker.name);

    Ok(())
}

/// Tests commenting with only an upcoming booking.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn future_booking_does_not_qualify() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;
    factory::booking::create_booking(db, item.id, booker.id).await?;

    let result = ItemService::new(db)
        .add_comment(booker.id, item.id, payload("Too early"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests commenting with only a rejected past booking.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejected_booking_does_not_qualify() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .in_past()
        .status(BookingStatus::Rejected)
        .build()
        .await?;

    let result = ItemService::new(db)
        .add_comment(booker.id, item.id, payload("Never got it"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests commenting on a nonexistent item.
///
/// Expected: Err(ItemNotFound)
#[tokio::test]
async fn fails_when_item_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = ItemService::new(db)
        .add_comment(user.id, 999, payload("Ghost item"))
        .await;

    assert!(matches!(result, Err(AppError::ItemNotFound(_))));

    Ok(())
}
