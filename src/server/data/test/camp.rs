use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::camp::CampRepository,
    model::camp::{CreateCampParam, UpdateCampParam},
};

/// Tests that a created camp starts with zero participants.
///
/// Expected: Ok(Camp) with participants == 0
#[tokio::test]
async fn insert_starts_with_zero_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    let camp = repo
        .insert(CreateCampParam {
            name: "Eye Camp".to_string(),
            image: "https://example.com/eye.png".to_string(),
            date_time: Utc::now(),
            location: "Dhaka".to_string(),
            professional: "Dr. Rahman".to_string(),
            fees: 25.0,
            description: "Free eye checkups".to_string(),
        })
        .await?;

    assert_eq!(camp.name, "Eye Camp");
    assert_eq!(camp.participants, 0);

    Ok(())
}

/// Tests the point lookup for a nonexistent camp id.
///
/// The empty lookup is not an error; the caller decides what absence means.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    let camp = repo.find_by_id(4242).await?;

    assert!(camp.is_none());

    Ok(())
}

/// Tests incrementing the participant counter.
///
/// Expected: Ok(1) and the counter one higher
#[tokio::test]
async fn adjust_participants_increments_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::CampFactory::new(db).participants(3).build().await?;

    let repo = CampRepository::new(db);
    let rows = repo.adjust_participants(created.id, 1).await?;

    assert_eq!(rows, 1);

    let camp = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(camp.participants, 4);

    Ok(())
}

/// Tests decrementing the participant counter.
///
/// Expected: Ok(1) and the counter one lower
#[tokio::test]
async fn adjust_participants_decrements_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::CampFactory::new(db).participants(3).build().await?;

    let repo = CampRepository::new(db);
    let rows = repo.adjust_participants(created.id, -1).await?;

    assert_eq!(rows, 1);

    let camp = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(camp.participants, 2);

    Ok(())
}

/// Tests adjusting the counter of a nonexistent camp.
///
/// Expected: Ok(0) rows affected
#[tokio::test]
async fn adjust_participants_affects_no_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    let rows = repo.adjust_participants(4242, 1).await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests replacing a camp's editable fields.
///
/// Expected: Ok(1) and the new values stored
#[tokio::test]
async fn update_replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::create_camp(db).await?;

    let repo = CampRepository::new(db);
    let rows = repo
        .update(
            created.id,
            UpdateCampParam {
                name: "Renamed Camp".to_string(),
                image: created.image.clone(),
                date_time: created.date_time,
                location: "Chattogram".to_string(),
                professional: created.professional.clone(),
                participants: 7,
                fees: 75.0,
                description: created.description.clone(),
            },
        )
        .await?;

    assert_eq!(rows, 1);

    let camp = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(camp.name, "Renamed Camp");
    assert_eq!(camp.location, "Chattogram");
    assert_eq!(camp.participants, 7);
    assert_eq!(camp.fees, 75.0);

    Ok(())
}

/// Tests deleting a camp.
///
/// Expected: Ok(1), then lookup returns None
#[tokio::test]
async fn delete_removes_camp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Camp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::create_camp(db).await?;

    let repo = CampRepository::new(db);
    let rows = repo.delete(created.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
