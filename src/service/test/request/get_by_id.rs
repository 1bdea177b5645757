use super::*;

/// Tests fetching a request enriched with its fulfilling items.
///
/// Expected: Ok with the linked item in the view
#[tokio::test]
async fn returns_request_with_fulfilling_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let request = factory::item_request::create_request(db, requester.id).await?;

    let owner = factory::user::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id)
        .request_id(Some(request.id))
        .build()
        .await?;

    let view = RequestService::new(db).get_by_id(requester.id, request.id).await?;

    assert_eq!(view.id, request.id);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].id, item.id);
    assert_eq!(view.items[0].request_id, Some(request.id));

    Ok(())
}

/// Tests fetching a nonexistent request.
///
/// Expected: Err(RequestNotFound)
#[tokio::test]
async fn fails_when_request_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = RequestService::new(db).get_by_id(user.id, 999).await;

    assert!(matches!(result, Err(AppError::RequestNotFound(_))));

    Ok(())
}

/// Tests fetching with a nonexistent caller.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_when_caller_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let request = factory::item_request::create_request(db, requester.id).await?;

    let result = RequestService::new(db).get_by_id(999, request.id).await;

    assert!(matches!(result, Err(AppError::UserNotFound(_))));

    Ok(())
}
