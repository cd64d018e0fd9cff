use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::misc_dto::{CreateEventRequest, UpdateEventRequest};
use crate::model::event::Event;
use crate::repository::event_repo::EventRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait EventService: Send + Sync {
    async fn create(&self, request: CreateEventRequest, owner: ObjectId) -> Result<Event, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<Event, ServiceError>;
    async fn list_for_user(&self, user: ObjectId) -> Result<Vec<Event>, ServiceError>;
    async fn update(&self, id: ObjectId, request: UpdateEventRequest) -> Result<Event, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct EventServiceImpl {
    pub event_repo: Arc<dyn EventRepository>,
}

impl EventServiceImpl {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        EventServiceImpl { event_repo }
    }
}

#[async_trait]
impl EventService for EventServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create(&self, request: CreateEventRequest, owner: ObjectId) -> Result<Event, ServiceError> {
        let event = Event {
            id: None,
            userId: owner,
            title: request.title,
            description: request.description,
            meetingLink: request.meeting_link,
            start: request.start,
            end: request.end,
            color: request.color,
            allDay: request.all_day.unwrap_or(false),
            createdAt: None,
            updatedAt: None,
        };
        self.event_repo.create(event).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<Event, ServiceError> {
        self.event_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(user = %user))]
    async fn list_for_user(&self, user: ObjectId) -> Result<Vec<Event>, ServiceError> {
        self.event_repo.list_by_user(user).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update(&self, id: ObjectId, request: UpdateEventRequest) -> Result<Event, ServiceError> {
        let mut event = self.event_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(description) = request.description {
            event.description = Some(description);
        }
        if let Some(meeting_link) = request.meeting_link {
            event.meetingLink = Some(meeting_link);
        }
        if let Some(start) = request.start {
            event.start = start;
        }
        if let Some(end) = request.end {
            event.end = end;
        }
        if let Some(color) = request.color {
            event.color = Some(color);
        }
        if let Some(all_day) = request.all_day {
            event.allDay = all_day;
        }

        self.event_repo.update(id, event).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.event_repo.delete(id).await.map_err(ServiceError::from)
    }
}
