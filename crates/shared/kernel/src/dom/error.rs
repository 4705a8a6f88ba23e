use std::borrow::Cow;

/// Errors raised by structural document operations.
#[mdf_derive::mdf_error]
pub enum DocumentError {
    /// The id does not refer to a live node (never existed or was removed).
    #[error("Node not found{}: {message}", format_context(.context))]
    NodeNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An element-only operation was applied to a text node.
    #[error("Not an element{}: {message}", format_context(.context))]
    NotAnElement { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The child already has a parent.
    #[error("Node already attached{}: {message}", format_context(.context))]
    AlreadyAttached { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Appending would make a node its own ancestor.
    #[error("Cycle detected{}: {message}", format_context(.context))]
    CycleDetected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The attribute name belongs to the activation core.
    #[error("Reserved attribute{}: {message}", format_context(.context))]
    ReservedAttribute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The document root cannot be detached or removed.
    #[error("Root is immovable{}: {message}", format_context(.context))]
    RootImmovable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
