use super::*;

/// Tests the own/others split between the two listings.
///
/// Expected: each listing contains only its side of the split
#[tokio::test]
async fn own_and_other_requests_are_split() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let own = factory::item_request::create_request(db, caller.id).await?;
    let foreign = factory::item_request::create_request(db, other.id).await?;

    let service = RequestService::new(db);

    let own_listing = service.get_all_own(caller.id, Page::new(0, 10)).await?;
    assert_eq!(own_listing.len(), 1);
    assert_eq!(own_listing[0].id, own.id);

    let others_listing = service
        .get_all_from_others(caller.id, Page::new(0, 10))
        .await?;
    assert_eq!(others_listing.len(), 1);
    assert_eq!(others_listing[0].id, foreign.id);

    Ok(())
}

/// Tests that the own-requests listing honours the page window.
///
/// Expected: a page of size 2 over three requests holds exactly two
#[tokio::test]
async fn own_listing_is_paged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await?;
    for _ in 0..3 {
        factory::item_request::create_request(db, caller.id).await?;
    }

    let service = RequestService::new(db);

    let first = service.get_all_own(caller.id, Page::new(0, 2)).await?;
    assert_eq!(first.len(), 2);

    let rest = service.get_all_own(caller.id, Page::new(2, 2)).await?;
    assert_eq!(rest.len(), 1);

    Ok(())
}
