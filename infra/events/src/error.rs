use std::borrow::Cow;

/// Errors that can occur during event bus operations.
#[mdf_derive::mdf_error]
pub enum EventBusError {
    /// An internal downcast failed; the type registry is inconsistent.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The channel exists but was registered with a different kind.
    #[error("Channel kind mismatch{}: {message}", format_context(.context))]
    ChannelKindMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The queue receiver for this event type has already been handed out.
    #[error("Receiver already taken{}: {message}", format_context(.context))]
    ReceiverTaken { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A bounded queue is full or its consumer is gone.
    #[error("Channel full{}: {message}", format_context(.context))]
    ChannelFull { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Capacity must be greater than zero.
    #[error("Invalid capacity{}: {message}", format_context(.context))]
    InvalidCapacity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
