//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Storage-assigned project identifier.
        id -> Int4,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-form project description.
        description -> Text,
    }
}

diesel::table! {
    /// Task records owned by projects.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form task description.
        description -> Text,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Owning project identifier.
        project_id -> Int4,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
