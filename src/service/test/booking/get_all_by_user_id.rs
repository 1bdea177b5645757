use super::*;

/// Tests that ALL is the union of the time partitions.
///
/// One past, one current, and one future booking exist; ALL must return all
/// three exactly once, and the per-filter queries each return their own.
///
/// Expected: ALL = CURRENT ∪ PAST ∪ FUTURE with no duplicates or omissions
#[tokio::test]
async fn all_filter_unions_the_time_partitions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let past = BookingFactory::new(db, item.id, booker.id).in_past().build().await?;
    let current = BookingFactory::new(db, item.id, booker.id).current().build().await?;
    let future = factory::booking::create_booking(db, item.id, booker.id).await?;

    let service = BookingService::new(db);
    let page = Page::new(0, 10);

    let all = service
        .get_all_by_user_id(booker.id, QueryState::All, page)
        .await?;
    let mut all_ids: Vec<i64> = all.iter().map(|b| b.id).collect();
    all_ids.sort_unstable();
    let mut expected = vec![past.id, current.id, future.id];
    expected.sort_unstable();
    assert_eq!(all_ids, expected);

    let mut partitioned = Vec::new();
    for state in [QueryState::Current, QueryState::Past, QueryState::Future] {
        let found = service.get_all_by_user_id(booker.id, state, page).await?;
        assert_eq!(found.len(), 1);
        partitioned.push(found[0].id);
    }
    partitioned.sort_unstable();
    assert_eq!(partitioned, expected);

    Ok(())
}

/// Tests the final id-descending ordering of the list output.
///
/// Two bookings share the same start; the newer id must come first.
///
/// Expected: Ok with ids strictly descending
#[tokio::test]
async fn output_is_sorted_by_id_descending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let start = Utc::now().naive_utc() + Duration::days(1);
    let end = start + Duration::days(1);
    for _ in 0..3 {
        BookingFactory::new(db, item.id, booker.id)
            .start(start)
            .end(end)
            .build()
            .await?;
    }

    let bookings = BookingService::new(db)
        .get_all_by_user_id(booker.id, QueryState::All, Page::new(0, 10))
        .await?;

    assert_eq!(bookings.len(), 3);
    assert!(bookings.windows(2).all(|pair| pair[0].id > pair[1].id));

    Ok(())
}

/// Tests the status filters through the service.
///
/// Expected: Ok with only the booking of the requested status
#[tokio::test]
async fn status_filters_select_by_persisted_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item, booker) = factory::helpers::create_booking_parties(db).await?;

    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Rejected)
        .build()
        .await?;

    let service = BookingService::new(db);
    let page = Page::new(0, 10);

    let found = service
        .get_all_by_user_id(booker.id, QueryState::Waiting, page)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, waiting.id);

    let found = service
        .get_all_by_user_id(booker.id, QueryState::Rejected, page)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, rejected.id);

    Ok(())
}

/// Tests listing for a nonexistent user.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_when_user_does_not_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .get_all_by_user_id(999, QueryState::All, Page::new(0, 10))
        .await;

    assert!(matches!(result, Err(AppError::UserNotFound(_))));

    Ok(())
}
