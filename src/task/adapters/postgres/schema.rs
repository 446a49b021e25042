//! Diesel schema for task and reference data persistence.

diesel::table! {
    /// Priority reference records.
    priorities (id) {
        /// Priority identifier.
        id -> Uuid,
        /// Numeric level, higher is more urgent.
        level -> Int4,
        /// Display name.
        #[max_length = 10]
        name -> Varchar,
    }
}

diesel::table! {
    /// Status reference records.
    statuses (id) {
        /// Status identifier.
        id -> Uuid,
        /// Status name, unique.
        #[max_length = 15]
        name -> Varchar,
    }
}

diesel::table! {
    /// Owner-scoped task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Task name.
        #[max_length = 50]
        name -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Free-form objectives.
        objectives -> Text,
        /// Creation timestamp.
        created_date -> Timestamptz,
        /// Planned start.
        start_date -> Nullable<Timestamptz>,
        /// Due date.
        due_date -> Nullable<Timestamptz>,
        /// Completion timestamp.
        completion_date -> Nullable<Timestamptz>,
        /// Referenced priority.
        priority_id -> Uuid,
        /// Referenced status.
        status_id -> Uuid,
        /// Completion percentage.
        progress -> Int4,
    }
}

diesel::joinable!(tasks -> priorities (priority_id));
diesel::joinable!(tasks -> statuses (status_id));
diesel::allow_tables_to_appear_in_same_query!(priorities, statuses, tasks);
