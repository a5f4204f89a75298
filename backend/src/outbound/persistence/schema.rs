//! Diesel table definitions.
//!
//! Kept in step with `backend/migrations` by hand.

diesel::table! {
    /// Contacts, one row per record, owned by a single user.
    contacts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning user id.
        user_id -> Uuid,
        /// Trimmed, non-empty display name.
        name -> Varchar,
        email -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
        /// `personal` or `professional`, enforced by a check constraint.
        contact_type -> Varchar,
        /// Creation timestamp; list ordering key.
        created_at -> Timestamptz,
    }
}
