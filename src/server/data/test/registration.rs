use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::registration::RegistrationRepository,
    model::registration::{ConfirmationStatus, JoinCampParam, PaymentStatus},
};

/// Tests that a fresh join record starts unpaid and pending.
///
/// Expected: Ok(Registration) with unpaid/pending state and no feedback eligibility
#[tokio::test]
async fn insert_starts_unpaid_and_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .insert(JoinCampParam {
            camp_id: camp.id,
            camp_name: camp.name.clone(),
            participant_email: "a@x.com".to_string(),
            participant_name: "Alice".to_string(),
            fees: camp.fees,
        })
        .await?;

    assert_eq!(registration.camp_id, camp.id);
    assert_eq!(registration.payment_status, PaymentStatus::Unpaid);
    assert_eq!(registration.confirmation_status, ConfirmationStatus::Pending);
    assert!(registration.transaction_id.is_none());
    assert!(!registration.feedback_eligible);

    Ok(())
}

/// Tests listing join records scoped to one participant.
///
/// Records belonging to other participants must not leak into the result.
///
/// Expected: Ok(Vec) containing only the requested participant's records
#[tokio::test]
async fn find_by_participant_filters_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    factory::registration::create_registration(db, camp.id, "a@x.com").await?;
    factory::registration::create_registration(db, camp.id, "a@x.com").await?;
    factory::registration::create_registration(db, camp.id, "b@x.com").await?;

    let repo = RegistrationRepository::new(db);
    let registrations = repo.find_by_participant("a@x.com").await?;

    assert_eq!(registrations.len(), 2);
    assert!(registrations
        .iter()
        .all(|r| r.participant_email == "a@x.com"));

    Ok(())
}

/// Tests confirming a join record.
///
/// Expected: Ok(1) and the record confirmed
#[tokio::test]
async fn confirm_marks_record_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_registration_with_dependencies(db).await?;

    let repo = RegistrationRepository::new(db);
    let rows = repo.confirm(created.id).await?;

    assert_eq!(rows, 1);

    let registration = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(
        registration.confirmation_status,
        ConfirmationStatus::Confirmed
    );

    Ok(())
}

/// Tests finalizing payment from a gateway callback.
///
/// One update marks the record paid, stores the transaction id, and makes
/// the participant feedback-eligible.
///
/// Expected: Ok(1) and the paid state stored
#[tokio::test]
async fn mark_paid_finalizes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_registration_with_dependencies(db).await?;

    let repo = RegistrationRepository::new(db);
    let rows = repo.mark_paid(created.id, "pi_12345").await?;

    assert_eq!(rows, 1);

    let registration = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(registration.payment_status, PaymentStatus::Paid);
    assert_eq!(registration.transaction_id.as_deref(), Some("pi_12345"));
    assert!(registration.feedback_eligible);

    Ok(())
}

/// Tests that a payment callback naming no known record affects nothing.
///
/// The zero row count is what lets the handler signal a failure distinct
/// from success.
///
/// Expected: Ok(0) rows affected
#[tokio::test]
async fn mark_paid_affects_no_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let rows = repo.mark_paid(4242, "pi_12345").await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests cancelling a join record.
///
/// Expected: Ok(1), then lookup returns None
#[tokio::test]
async fn delete_removes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_registration_with_dependencies(db).await?;

    let repo = RegistrationRepository::new(db);
    let rows = repo.delete(created.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
