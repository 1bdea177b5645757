use super::*;

/// Tests the own-requests listing.
///
/// Verifies that only the user's requests are returned, newest first.
///
/// Expected: Ok with the user's requests created-descending
#[tokio::test]
async fn returns_own_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let older = ItemRequestFactory::new(db, requester.id)
        .created(now - Duration::days(2))
        .build()
        .await?;
    let newer = ItemRequestFactory::new(db, requester.id)
        .created(now - Duration::days(1))
        .build()
        .await?;
    factory::item_request::create_request(db, other.id).await?;

    let requests = RequestRepository::new(db)
        .find_all_by_user_id(requester.id, Page::new(0, 10))
        .await?;

    let ids: Vec<i64> = requests.iter().map(|request| request.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests offset and limit on the own-requests listing.
///
/// Expected: the second page holds exactly the next request in created order
#[tokio::test]
async fn pages_through_own_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let mut created = Vec::new();
    for day in 1..=3 {
        created.push(
            ItemRequestFactory::new(db, requester.id)
                .created(now - Duration::days(day))
                .build()
                .await?,
        );
    }

    let repo = RequestRepository::new(db);

    let first = repo.find_all_by_user_id(requester.id, Page::new(0, 2)).await?;
    let second = repo.find_all_by_user_id(requester.id, Page::new(2, 2)).await?;

    let first_ids: Vec<i64> = first.iter().map(|request| request.id).collect();
    assert_eq!(first_ids, vec![created[0].id, created[1].id]);

    let second_ids: Vec<i64> = second.iter().map(|request| request.id).collect();
    assert_eq!(second_ids, vec![created[2].id]);

    Ok(())
}
