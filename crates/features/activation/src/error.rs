use mdf_event_bus::EventBusError;
use std::borrow::Cow;

/// Errors raised while wiring document events through the bus.
#[mdf_derive::mdf_error]
pub enum HostError {
    #[error("Event bus error{}: {source}", format_context(.context))]
    EventBus { source: EventBusError, context: Option<Cow<'static, str>> },
}
