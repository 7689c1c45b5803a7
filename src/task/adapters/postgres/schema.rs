//! Diesel schema for task persistence.

diesel::table! {
    /// Task records captured from slash commands and message actions.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Display title.
        #[max_length = 255]
        title -> Varchar,
        /// Assignee name, empty when unassigned.
        #[max_length = 255]
        assignee -> Varchar,
        /// Due date string, empty when absent.
        #[max_length = 32]
        due -> Varchar,
        /// Priority tier label.
        #[max_length = 16]
        priority -> Varchar,
        /// Lifecycle status label.
        #[max_length = 16]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
