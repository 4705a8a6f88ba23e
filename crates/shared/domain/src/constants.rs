//! Attribute and tag names forming the contract between the HTML producer and
//! the activation core.

/// Tag of an enhanceable field.
pub const FIELD_TAG: &str = "textarea";

/// Field Marker attribute, written by the HTML producer.
pub const FIELD_MARKER_ATTR: &str = "data-md-editor";

/// Value the Field Marker must carry for the element to be a candidate.
pub const FIELD_MARKER_VALUE: &str = "true";

/// Reserved attribute surfacing the Activation Record when a document is
/// rendered. Only the activation core may produce it.
pub const ACTIVATION_RECORD_ATTR: &str = "data-md-editor-initialized";

/// Value rendered for [`ACTIVATION_RECORD_ATTR`].
pub const ACTIVATION_RECORD_VALUE: &str = "true";

/// Element identifier attribute used to address containers.
pub const ID_ATTR: &str = "id";

/// Name of the synthetic root element every document starts with.
pub const DOCUMENT_ROOT_TAG: &str = "#document";
