//! Change events and the envelope the member store hands to subscribers.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Implemented by every event a group emits.
pub trait DomainEvent: Send + Sync {
    /// Routing key, e.g. "member_choice.changed.v1".
    fn event_type(&self) -> &'static str;

    fn schema_version(&self) -> u32;

    /// Group the event belongs to.
    fn aggregate_id(&self) -> String;

    fn aggregate_type(&self) -> &'static str;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;
}

/// Blanket `to_envelope()` for events that serialize.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements [`DomainEvent`] by pointing at the event's own fields.
///
/// ```ignore
/// domain_event!(
///     SelectionSubmitted,
///     event_type = "selection.submitted.v1",
///     schema_version = 1,
///     aggregate_id = group_id,
///     aggregate_type = "Group",
///     occurred_at = submitted_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub use domain_event;

/// Random per-event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who caused the change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// An event plus its routing fields, with the body kept as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Wraps a domain event, serializing it into the payload.
    pub fn from_event<T>(event: &T) -> Self
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        Self {
            event_id: event.event_id(),
            event_type: event.event_type().to_string(),
            schema_version: event.schema_version(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)
                .expect("Event serialization should never fail for well-formed events"),
            metadata: EventMetadata::default(),
        }
    }

    /// Records the member behind the change.
    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.user_id = Some(id.into());
        self
    }

    /// Reads the payload back as a concrete event.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct PingEvent {
        event_id: EventId,
        group: String,
        at: Timestamp,
    }

    domain_event!(
        PingEvent,
        event_type = "test.ping.v2",
        schema_version = 2,
        aggregate_id = group,
        aggregate_type = "Group",
        occurred_at = at,
        event_id = event_id
    );

    fn ping() -> PingEvent {
        PingEvent {
            event_id: EventId::new(),
            group: "TRIP".to_string(),
            at: Timestamp::now(),
        }
    }

    #[test]
    fn event_ids_are_unique() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn envelope_copies_routing_fields_from_event() {
        let event = ping();
        let envelope = event.to_envelope();

        assert_eq!(envelope.event_id, event.event_id);
        assert_eq!(envelope.event_type, "test.ping.v2");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.aggregate_id, "TRIP");
        assert_eq!(envelope.aggregate_type, "Group");
        assert!(envelope.metadata.user_id.is_none());

        let back: PingEvent = envelope.payload_as().unwrap();
        assert_eq!(back.group, "TRIP");
    }

    #[test]
    fn user_id_is_serialized_only_when_set() {
        let anonymous = serde_json::to_string(&ping().to_envelope().metadata).unwrap();
        assert_eq!(anonymous, "{}");

        let envelope = ping().to_envelope().with_user_id("alice");
        assert_eq!(envelope.metadata.user_id.as_deref(), Some("alice"));
    }
}
