//! Async batch resource implementation.
//!
//! An async batch queues many writes of one kind (discounts, plans,
//! one-time items) and runs them on the server. The flow is:
//! 1. `create` a batch with its [`AsyncBatchType`]
//! 2. `create_tasks` to add task bodies
//! 3. `process` to start it
//! 4. poll with `get` and read outcomes with `list_tasks`
//!
//! # Example
//!
//! ```rust,ignore
//! use recharge_api::rest::resources::v2021_11::{
//!     AsyncBatchCreateBody, AsyncBatchCreateTaskBody, AsyncBatchType, DiscountDeleteBody,
//! };
//!
//! let batches = client.async_batches();
//!
//! let batch = batches
//!     .create(&AsyncBatchCreateBody { batch_type: AsyncBatchType::DiscountDelete })
//!     .await?;
//!
//! let tasks = vec![
//!     AsyncBatchCreateTaskBody::new(DiscountDeleteBody { discount_id: 1 }),
//!     AsyncBatchCreateTaskBody::new(DiscountDeleteBody { discount_id: 2 }),
//! ];
//! batches.create_tasks(batch.id, &tasks).await?;
//! batches.process(batch.id).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::discounts::{DiscountCreateBody, DiscountDeleteBody, DiscountUpdateBody};
use super::onetimes::{OnetimeCreateBody, OnetimeDeleteBody};
use super::plans::{PlanCreateBody, PlanDeleteBody, PlanUpdateBody};
use crate::clients::{HttpMethod, RestClient};
use crate::config::ApiVersion;
use crate::rest::{timestamp, RechargeResource, ResourceError, ResourcePath, ResourceResponse};

const CREATE: ResourcePath =
    ResourcePath::new(HttpMethod::Post, "async_batches", &["write_batches"]);
const CREATE_TASKS: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "async_batches/{batch_id}/tasks",
    &["write_batches"],
);
const GET: ResourcePath =
    ResourcePath::new(HttpMethod::Get, "async_batches/{batch_id}", &["read_batches"]);
const LIST: ResourcePath = ResourcePath::new(HttpMethod::Get, "async_batches", &["read_batches"]);
const LIST_TASKS: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    "async_batches/{batch_id}/tasks",
    &["read_batches"],
);
const PROCESS: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    "async_batches/{batch_id}/process",
    &["write_batches"],
);

/// The kind of write every task in a batch performs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AsyncBatchType {
    DiscountCreate,
    DiscountDelete,
    DiscountUpdate,
    BulkPlansCreate,
    BulkPlansUpdate,
    BulkPlansDelete,
    OnetimeCreate,
    OnetimeDelete,
}

/// Body for creating a batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncBatchCreateBody {
    pub batch_type: AsyncBatchType,
}

/// The payload of a single batch task.
///
/// Serializes as the wrapped body itself. The variant must match the batch's
/// [`AsyncBatchType`]; Recharge rejects mismatched tasks.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AsyncBatchTaskBody {
    DiscountCreate(DiscountCreateBody),
    DiscountUpdate(DiscountUpdateBody),
    DiscountDelete(DiscountDeleteBody),
    PlanCreate(PlanCreateBody),
    PlanUpdate(PlanUpdateBody),
    PlanDelete(PlanDeleteBody),
    OnetimeCreate(OnetimeCreateBody),
    OnetimeDelete(OnetimeDeleteBody),
}

impl AsyncBatchTaskBody {
    /// Returns the batch type this task belongs in.
    #[must_use]
    pub const fn batch_type(&self) -> AsyncBatchType {
        match self {
            Self::DiscountCreate(_) => AsyncBatchType::DiscountCreate,
            Self::DiscountUpdate(_) => AsyncBatchType::DiscountUpdate,
            Self::DiscountDelete(_) => AsyncBatchType::DiscountDelete,
            Self::PlanCreate(_) => AsyncBatchType::BulkPlansCreate,
            Self::PlanUpdate(_) => AsyncBatchType::BulkPlansUpdate,
            Self::PlanDelete(_) => AsyncBatchType::BulkPlansDelete,
            Self::OnetimeCreate(_) => AsyncBatchType::OnetimeCreate,
            Self::OnetimeDelete(_) => AsyncBatchType::OnetimeDelete,
        }
    }
}

macro_rules! task_body_from {
    ($($body:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$body> for AsyncBatchTaskBody {
                fn from(body: $body) -> Self {
                    Self::$variant(body)
                }
            }
        )*
    };
}

task_body_from! {
    DiscountCreateBody => DiscountCreate,
    DiscountUpdateBody => DiscountUpdate,
    DiscountDeleteBody => DiscountDelete,
    PlanCreateBody => PlanCreate,
    PlanUpdateBody => PlanUpdate,
    PlanDeleteBody => PlanDelete,
    OnetimeCreateBody => OnetimeCreate,
    OnetimeDeleteBody => OnetimeDelete,
}

/// One task to add to a batch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AsyncBatchCreateTaskBody {
    pub body: AsyncBatchTaskBody,
}

impl AsyncBatchCreateTaskBody {
    /// Wraps a task payload.
    #[must_use]
    pub fn new(body: impl Into<AsyncBatchTaskBody>) -> Self {
        Self { body: body.into() }
    }
}

#[derive(Serialize)]
struct TaskList<'a> {
    tasks: &'a [AsyncBatchCreateTaskBody],
}

/// A batch as returned by Recharge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncBatch {
    pub id: u64,
    pub batch_type: AsyncBatchType,
    /// Lifecycle state, e.g. `not_started`, `processing`, `completed`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_task_count: Option<u64>,
    #[serde(default)]
    pub failed_task_count: Option<u64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(with = "timestamp::option", default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp::option", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Outcome of a processed task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncBatchTaskResult {
    #[serde(default)]
    pub status_code: Option<u16>,
    /// The response body the task produced.
    #[serde(default)]
    pub output: serde_json::Value,
}

/// A task as returned by Recharge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncBatchTask {
    pub id: u64,
    #[serde(default)]
    pub body: serde_json::Value,
    #[serde(default)]
    pub result: Option<AsyncBatchTaskResult>,
}

/// Async batch endpoints (API version 2021-11).
#[derive(Debug, Clone, Copy)]
pub struct AsyncBatches<'a> {
    client: &'a RestClient,
}

impl RechargeResource for AsyncBatches<'_> {
    const NAME: &'static str = "AsyncBatch";
    const API_VERSION: ApiVersion = ApiVersion::V2021_11;
    const ID_PARAM: &'static str = "batch_id";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl<'a> AsyncBatches<'a> {
    /// Creates a handle for the async batch endpoints.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Creates an empty batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `write_batches`.
    pub async fn create(
        &self,
        body: &AsyncBatchCreateBody,
    ) -> Result<ResourceResponse<AsyncBatch>, ResourceError> {
        let body = serde_json::to_value(body)?;
        self.fetch(&CREATE, &[], Some(body), None, "async_batch").await
    }

    /// Adds tasks to a batch, posted as `{"tasks": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the batch doesn't exist.
    pub async fn create_tasks(
        &self,
        batch_id: u64,
        tasks: &[AsyncBatchCreateTaskBody],
    ) -> Result<ResourceResponse<Vec<AsyncBatchTask>>, ResourceError> {
        let body = serde_json::to_value(TaskList { tasks })?;
        self.fetch(
            &CREATE_TASKS,
            &[("batch_id", batch_id)],
            Some(body),
            None,
            "async_batch_tasks",
        )
        .await
    }

    /// Gets a batch by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the batch doesn't exist.
    pub async fn get(&self, batch_id: u64) -> Result<ResourceResponse<AsyncBatch>, ResourceError> {
        self.fetch(&GET, &[("batch_id", batch_id)], None, None, "async_batch")
            .await
    }

    /// Lists batches.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Scope`] without `read_batches`.
    pub async fn list(&self) -> Result<ResourceResponse<Vec<AsyncBatch>>, ResourceError> {
        self.fetch(&LIST, &[], None, None, "async_batches").await
    }

    /// Lists the tasks of a batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the batch doesn't exist.
    pub async fn list_tasks(
        &self,
        batch_id: u64,
    ) -> Result<ResourceResponse<Vec<AsyncBatchTask>>, ResourceError> {
        self.fetch(
            &LIST_TASKS,
            &[("batch_id", batch_id)],
            None,
            None,
            "async_batch_tasks",
        )
        .await
    }

    /// Starts processing a batch. Sends an empty JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the batch doesn't exist.
    pub async fn process(
        &self,
        batch_id: u64,
    ) -> Result<ResourceResponse<AsyncBatch>, ResourceError> {
        self.fetch(&PROCESS, &[("batch_id", batch_id)], None, None, "async_batch")
            .await
    }
}

impl RestClient {
    /// Returns a handle for the async batch endpoints.
    #[must_use]
    pub const fn async_batches(&self) -> AsyncBatches<'_> {
        AsyncBatches::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::v2021_11::{DiscountStatus, DiscountUpdateBody};
    use serde_json::json;

    #[test]
    fn test_async_batch_paths_and_scopes() {
        assert_eq!(CREATE.endpoint(), "POST /async_batches");
        assert_eq!(CREATE_TASKS.endpoint(), "POST /async_batches/{batch_id}/tasks");
        assert_eq!(PROCESS.endpoint(), "POST /async_batches/{batch_id}/process");
        assert_eq!(GET.required_scopes, &["read_batches"]);
        assert_eq!(LIST.required_scopes, &["read_batches"]);
        assert_eq!(LIST_TASKS.required_scopes, &["read_batches"]);
        assert_eq!(CREATE.required_scopes, &["write_batches"]);
    }

    #[test]
    fn test_batch_type_wire_names() {
        assert_eq!(
            serde_json::to_value(AsyncBatchCreateBody {
                batch_type: AsyncBatchType::BulkPlansUpdate
            })
            .unwrap(),
            json!({"batch_type": "bulk_plans_update"})
        );
    }

    #[test]
    fn test_task_list_wraps_bodies() {
        let tasks = vec![
            AsyncBatchCreateTaskBody::new(DiscountDeleteBody { discount_id: 1 }),
            AsyncBatchCreateTaskBody::new(DiscountUpdateBody {
                status: Some(DiscountStatus::Disabled),
                ..Default::default()
            }),
        ];

        assert_eq!(
            serde_json::to_value(TaskList { tasks: &tasks }).unwrap(),
            json!({"tasks": [
                {"body": {"discount_id": 1}},
                {"body": {"status": "disabled"}}
            ]})
        );
    }

    #[test]
    fn test_task_body_knows_its_batch_type() {
        let body: AsyncBatchTaskBody = OnetimeDeleteBody { onetime_id: 9 }.into();
        assert_eq!(body.batch_type(), AsyncBatchType::OnetimeDelete);

        let body: AsyncBatchTaskBody = PlanDeleteBody { id: 3 }.into();
        assert_eq!(body.batch_type(), AsyncBatchType::BulkPlansDelete);
    }

    #[test]
    fn test_batch_and_task_deserialize() {
        let batch: AsyncBatch = serde_json::from_value(json!({
            "id": 77,
            "batch_type": "discount_create",
            "status": "not_started",
            "total_task_count": 0,
            "created_at": "2021-11-02T10:00:00+00:00",
            "submitted_at": null
        }))
        .unwrap();
        assert_eq!(batch.batch_type, AsyncBatchType::DiscountCreate);
        assert!(batch.created_at.is_some());

        let task: AsyncBatchTask = serde_json::from_value(json!({
            "id": 5,
            "body": {"discount_id": 1},
            "result": {"status_code": 204, "output": {}}
        }))
        .unwrap();
        assert_eq!(task.result.and_then(|r| r.status_code), Some(204));
    }
}
