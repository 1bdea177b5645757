use super::*;

fn payload(name: &str, request_id: Option<i64>) -> ItemPayload {
    ItemPayload {
        name: Some(name.to_string()),
        description: Some(format!("{name} description")),
        available: Some(true),
        request_id,
    }
}

/// Tests creating an item linked to an existing request.
///
/// Expected: Ok with the request link preserved
#[tokio::test]
async fn keeps_link_to_existing_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let request = factory::item_request::create_request(db, requester.id).await?;
    let owner = factory::user::create_user(db).await?;

    let item = ItemService::new(db)
        .add(owner.id, payload("Drill", Some(request.id)))
        .await?;

    assert_eq!(item.request_id, Some(request.id));
    assert_eq!(item.owner.id, owner.id);
    assert!(item.last_booking.is_none());
    assert!(item.next_booking.is_none());
    assert!(item.comments.is_empty());

    Ok(())
}

/// Tests creating an item pointing at a nonexistent request.
///
/// The dangling reference is dropped rather than rejected.
///
/// Expected: Ok with no request link
#[tokio::test]
async fn drops_dangling_request_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let item = ItemService::new(db).add(owner.id, payload("Drill", Some(999))).await?;

    assert_eq!(item.request_id, None);

    Ok(())
}

/// Tests creating an item for a nonexistent owner.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_when_owner_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ItemService::new(db).add(999, payload("Drill", None)).await;

    assert!(matches!(result, Err(AppError::UserNotFound(_))));

    Ok(())
}
