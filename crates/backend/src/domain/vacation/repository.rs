use chrono::{NaiveDate, Utc};
use contracts::domain::vacation::aggregate::{VacationRequest, VacationStatus};
use contracts::shared::stats::StatsSummary;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vacation_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for VacationRequest {
    fn from(m: Model) -> Self {
        VacationRequest {
            id: m.id,
            employee_name: m.employee_name,
            start_date: m.start_date,
            end_date: m.end_date,
            // The column only ever holds wire values we wrote ourselves
            status: VacationStatus::parse(&m.status).unwrap_or_default(),
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// List requests, newest first. `employee` is a substring match,
/// `status` an exact match on the stored wire value.
pub async fn list(
    employee: Option<&str>,
    status: Option<&str>,
) -> anyhow::Result<Vec<VacationRequest>> {
    let mut query = Entity::find();
    if let Some(s) = status {
        query = query.filter(Column::Status.eq(s));
    }
    if let Some(e) = employee {
        query = query.filter(Column::EmployeeName.contains(e));
    }
    let items = query
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<VacationRequest>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(
    employee_name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> anyhow::Result<VacationRequest> {
    let active = ActiveModel {
        id: NotSet,
        employee_name: Set(employee_name.to_string()),
        start_date: Set(start_date),
        end_date: Set(end_date),
        status: Set(VacationStatus::Pending.as_str().to_string()),
        created_at: Set(Utc::now()),
    };
    let model = active.insert(conn()).await?;
    Ok(model.into())
}

pub async fn set_status(
    id: i64,
    status: VacationStatus,
) -> anyhow::Result<Option<VacationRequest>> {
    let Some(model) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = model.into();
    active.status = Set(status.as_str().to_string());
    let updated = active.update(conn()).await?;
    Ok(Some(updated.into()))
}

pub async fn update_fields(
    id: i64,
    employee_name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> anyhow::Result<Option<VacationRequest>> {
    let Some(model) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = model.into();
    active.employee_name = Set(employee_name.to_string());
    active.start_date = Set(start_date);
    active.end_date = Set(end_date);
    let updated = active.update(conn()).await?;
    Ok(Some(updated.into()))
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn stats() -> anyhow::Result<StatsSummary> {
    async fn count_status(status: VacationStatus) -> anyhow::Result<i64> {
        let n = Entity::find()
            .filter(Column::Status.eq(status.as_str()))
            .count(conn())
            .await?;
        Ok(n as i64)
    }

    let total = Entity::find().count(conn()).await? as i64;
    Ok(StatsSummary {
        total,
        pending: count_status(VacationStatus::Pending).await?,
        approved: count_status(VacationStatus::Approved).await?,
        rejected: count_status(VacationStatus::Rejected).await?,
    })
}
