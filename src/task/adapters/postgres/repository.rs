//! `PostgreSQL` repositories for tasks and reference data.

use super::{
    models::{PriorityRow, StatusRow, TaskChangeset, TaskRow},
    schema::{priorities, statuses, tasks},
};
use crate::database::{BlockingError, PgPool, run_blocking};
use crate::task::{
    domain::{
        OwnerId, PersistedTaskData, Priority, PriorityId, PriorityName, Progress, Status,
        StatusId, StatusName, Task, TaskDomainError, TaskId, TaskName, TaskSchedule,
    },
    ports::{
        ReferenceDataError, ReferenceDataRepository, ReferenceDataResult, TaskOrder, TaskQuery,
        TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

type JoinedRow = (TaskRow, PriorityRow, StatusRow);

impl From<BlockingError> for TaskRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}

impl From<BlockingError> for ReferenceDataError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_task_row(task);
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => map_write_error(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changes = to_changeset(task);
        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changes)
                .execute(connection)
                .map_err(map_write_error)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .inner_join(priorities::table)
                .inner_join(statuses::table)
                .filter(tasks::id.eq(id.into_inner()))
                .select((
                    TaskRow::as_select(),
                    PriorityRow::as_select(),
                    StatusRow::as_select(),
                ))
                .first::<JoinedRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let owner = query.owner().into_inner();
        let status_names: Vec<&'static str> = query
            .status_kinds()
            .iter()
            .filter_map(|kind| kind.canonical_name())
            .collect();
        let requires_full_completion = query.requires_full_completion();
        let order = query.order();

        run_blocking(&self.pool, move |connection| {
            let mut statement = tasks::table
                .inner_join(priorities::table)
                .inner_join(statuses::table)
                .filter(tasks::owner_id.eq(owner))
                .filter(statuses::name.eq_any(status_names))
                .select((
                    TaskRow::as_select(),
                    PriorityRow::as_select(),
                    StatusRow::as_select(),
                ))
                .into_boxed();

            if requires_full_completion {
                statement = statement
                    .filter(tasks::progress.eq(i32::from(Progress::COMPLETE.value())))
                    .filter(tasks::completion_date.is_not_null());
            }

            statement = match order {
                TaskOrder::CreatedAscending => statement.order(tasks::created_date.asc()),
                TaskOrder::PriorityThenCompletionDescending => statement
                    .order(priorities::level.desc())
                    .then_order_by(tasks::completion_date.desc()),
            };

            let rows = statement
                .load::<JoinedRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn map_write_error(err: DieselError) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::UniqueViolation,
            _,
        ) => TaskRepositoryError::integrity(err),
        _ => TaskRepositoryError::persistence(err),
    }
}

fn to_task_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        name: task.name().as_str().to_owned(),
        description: task.description().to_owned(),
        objectives: task.objectives().to_owned(),
        created_date: task.created_at(),
        start_date: task.start_date(),
        due_date: task.due_date(),
        completion_date: task.completion_date(),
        priority_id: task.priority().id().into_inner(),
        status_id: task.status().id().into_inner(),
        progress: i32::from(task.progress().value()),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        name: task.name().as_str().to_owned(),
        description: task.description().to_owned(),
        objectives: task.objectives().to_owned(),
        start_date: task.start_date(),
        due_date: task.due_date(),
        completion_date: task.completion_date(),
        priority_id: task.priority().id().into_inner(),
        status_id: task.status().id().into_inner(),
        progress: i32::from(task.progress().value()),
    }
}

fn row_to_task((task_row, priority_row, status_row): JoinedRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        name,
        description,
        objectives,
        created_date,
        start_date,
        due_date,
        completion_date,
        progress,
        ..
    } = task_row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner: OwnerId::from_uuid(owner_id),
        name: TaskName::new(name).map_err(TaskRepositoryError::invalid_persisted_data)?,
        description,
        objectives,
        created_at: created_date,
        schedule: TaskSchedule {
            start_date,
            due_date,
        },
        completion_date,
        priority: row_to_priority(priority_row)
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        status: row_to_status(status_row).map_err(TaskRepositoryError::invalid_persisted_data)?,
        progress: Progress::new(i64::from(progress))
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
    };
    Ok(Task::from_persisted(data))
}

fn row_to_priority(row: PriorityRow) -> Result<Priority, TaskDomainError> {
    Ok(Priority::from_persisted(
        PriorityId::from_uuid(row.id),
        row.level,
        PriorityName::new(row.name)?,
    ))
}

fn row_to_status(row: StatusRow) -> Result<Status, TaskDomainError> {
    Ok(Status::from_persisted(
        StatusId::from_uuid(row.id),
        StatusName::new(row.name)?,
    ))
}

/// `PostgreSQL`-backed priority and status tables.
#[derive(Debug, Clone)]
pub struct PostgresReferenceData {
    pool: PgPool,
}

impl PostgresReferenceData {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceDataRepository for PostgresReferenceData {
    async fn store_priority(&self, priority: &Priority) -> ReferenceDataResult<()> {
        let name = priority.name().clone();
        let row = PriorityRow {
            id: priority.id().into_inner(),
            level: priority.level(),
            name: priority.name().as_str().to_owned(),
        };
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(priorities::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReferenceDataError::DuplicatePriorityName(name)
                    }
                    _ => ReferenceDataError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn store_status(&self, status: &Status) -> ReferenceDataResult<()> {
        let name = status.name().clone();
        let row = StatusRow {
            id: status.id().into_inner(),
            name: status.name().as_str().to_owned(),
        };
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(statuses::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReferenceDataError::DuplicateStatusName(name)
                    }
                    _ => ReferenceDataError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_priority(&self, id: PriorityId) -> ReferenceDataResult<Option<Priority>> {
        run_blocking(&self.pool, move |connection| {
            let row = priorities::table
                .find(id.into_inner())
                .select(PriorityRow::as_select())
                .first::<PriorityRow>(connection)
                .optional()
                .map_err(ReferenceDataError::persistence)?;
            row.map(row_to_priority)
                .transpose()
                .map_err(ReferenceDataError::invalid_persisted_data)
        })
        .await
    }

    async fn find_status(&self, id: StatusId) -> ReferenceDataResult<Option<Status>> {
        run_blocking(&self.pool, move |connection| {
            let row = statuses::table
                .find(id.into_inner())
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(ReferenceDataError::persistence)?;
            row.map(row_to_status)
                .transpose()
                .map_err(ReferenceDataError::invalid_persisted_data)
        })
        .await
    }

    async fn find_status_by_name(
        &self,
        name: &StatusName,
    ) -> ReferenceDataResult<Option<Status>> {
        let lookup = name.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = statuses::table
                .filter(statuses::name.eq(lookup))
                .select(StatusRow::as_select())
                .first::<StatusRow>(connection)
                .optional()
                .map_err(ReferenceDataError::persistence)?;
            row.map(row_to_status)
                .transpose()
                .map_err(ReferenceDataError::invalid_persisted_data)
        })
        .await
    }

    async fn list_priorities(&self) -> ReferenceDataResult<Vec<Priority>> {
        run_blocking(&self.pool, move |connection| {
            let rows = priorities::table
                .order(priorities::level.asc())
                .select(PriorityRow::as_select())
                .load::<PriorityRow>(connection)
                .map_err(ReferenceDataError::persistence)?;
            rows.into_iter()
                .map(row_to_priority)
                .collect::<Result<Vec<_>, _>>()
                .map_err(ReferenceDataError::invalid_persisted_data)
        })
        .await
    }

    async fn list_statuses(&self) -> ReferenceDataResult<Vec<Status>> {
        run_blocking(&self.pool, move |connection| {
            let rows = statuses::table
                .order(statuses::name.asc())
                .select(StatusRow::as_select())
                .load::<StatusRow>(connection)
                .map_err(ReferenceDataError::persistence)?;
            rows.into_iter()
                .map(row_to_status)
                .collect::<Result<Vec<_>, _>>()
                .map_err(ReferenceDataError::invalid_persisted_data)
        })
        .await
    }
}
