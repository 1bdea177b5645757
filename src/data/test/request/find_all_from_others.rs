use super::*;

/// Tests the other-users listing.
///
/// Verifies that the caller's own requests are excluded and the rest are
/// returned newest first within the page window.
///
/// Expected: Ok with only other users' requests
#[tokio::test]
async fn excludes_own_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::item_request::create_request(db, caller.id).await?;
    let foreign = factory::item_request::create_request(db, other.id).await?;

    let requests = RequestRepository::new(db)
        .find_all_from_others(caller.id, Page::new(0, 10))
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, foreign.id);

    Ok(())
}

/// Tests the page window on the other-users listing.
///
/// Expected: Ok with one request per page and no overlap
#[tokio::test]
async fn applies_page_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    for days in 1..=2 {
        ItemRequestFactory::new(db, other.id)
            .created(now - Duration::days(days))
            .build()
            .await?;
    }

    let repo = RequestRepository::new(db);

    let first = repo.find_all_from_others(caller.id, Page::new(0, 1)).await?;
    let second = repo.find_all_from_others(caller.id, Page::new(1, 1)).await?;

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(first[0].id, second[0].id);

    Ok(())
}
