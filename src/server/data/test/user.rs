use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParam, Role, UpdateProfileParam},
};

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) with the stored fields
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("a@x.com")
        .name("Alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("a@x.com").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, Role::Participant);

    Ok(())
}

/// Tests the lookup for an email with no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("ghost@example.com").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that inserted users start as standard participants.
///
/// Expected: Ok(User) with the participant role
#[tokio::test]
async fn insert_creates_participant_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .insert(RegisterUserParam {
            email: "new@x.com".to_string(),
            name: "Newcomer".to_string(),
            photo_url: Some("https://example.com/p.png".to_string()),
            phone: None,
        })
        .await?;

    assert_eq!(user.email, "new@x.com");
    assert_eq!(user.role, Role::Participant);
    assert!(!user.role.is_admin());
    assert_eq!(user.photo_url.as_deref(), Some("https://example.com/p.png"));

    Ok(())
}

/// Tests updating profile fields leaves email and role untouched.
///
/// Expected: Ok(1) and only profile columns changed
#[tokio::test]
async fn update_profile_replaces_profile_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_admin(db, "admin@example.com").await?;

    let repo = UserRepository::new(db);
    let rows = repo
        .update_profile(
            created.id,
            UpdateProfileParam {
                name: "Renamed".to_string(),
                photo_url: None,
                phone: Some("555-0100".to_string()),
            },
        )
        .await?;

    assert_eq!(rows, 1);

    let user = repo.find_by_email("admin@example.com").await?.unwrap();
    assert_eq!(user.name, "Renamed");
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
    // Role survives profile updates
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests updating a nonexistent user.
///
/// Expected: Ok(0) rows affected
#[tokio::test]
async fn update_profile_affects_no_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let rows = repo
        .update_profile(
            9999,
            UpdateProfileParam {
                name: "Nobody".to_string(),
                photo_url: None,
                phone: None,
            },
        )
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests deleting a user.
///
/// Expected: Ok(1), then lookup returns None
#[tokio::test]
async fn delete_removes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("gone@x.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let rows = repo.delete(created.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_email("gone@x.com").await?.is_none());

    Ok(())
}

/// Tests listing all users ordered by name.
///
/// Expected: Ok(Vec) sorted alphabetically
#[tokio::test]
async fn get_all_orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Zoe").build().await?;
    factory::user::UserFactory::new(db).name("Adam").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Adam");
    assert_eq!(users[1].name, "Zoe");

    Ok(())
}
