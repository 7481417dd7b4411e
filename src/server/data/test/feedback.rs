use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::feedback::FeedbackRepository, model::feedback::SubmitFeedbackParam};

/// Tests recording feedback for a camp.
///
/// Expected: Ok(Feedback) with the submitted fields
#[tokio::test]
async fn insert_records_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .insert(SubmitFeedbackParam {
            camp_id: camp.id,
            participant_email: "a@x.com".to_string(),
            rating: 4,
            comment: "Well organized".to_string(),
        })
        .await?;

    assert_eq!(feedback.camp_id, camp.id);
    assert_eq!(feedback.rating, 4);
    assert_eq!(feedback.comment, "Well organized");

    Ok(())
}

/// Tests listing all feedback.
///
/// Expected: Ok(Vec) with every stored record
#[tokio::test]
async fn get_all_returns_every_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    factory::feedback::create_feedback(db, camp.id, "a@x.com").await?;
    factory::feedback::create_feedback(db, camp.id, "b@x.com").await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo.get_all().await?;

    assert_eq!(feedback.len(), 2);

    Ok(())
}
