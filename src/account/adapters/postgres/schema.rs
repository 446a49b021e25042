//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Unique username.
        #[max_length = 100]
        username -> Varchar,
        /// Encoded credential hash.
        password_hash -> Text,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
