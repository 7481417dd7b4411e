use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub camp_id: i32,
    pub camp_name: String,
    pub participant_email: String,
    pub participant_name: String,
    pub fees: f64,
    pub payment_status: String,
    pub confirmation_status: String,
    pub transaction_id: Option<String>,
    pub feedback_eligible: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
