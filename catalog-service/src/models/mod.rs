pub mod song;
pub mod user;

pub use song::Song;
pub use user::User;

use uuid::Uuid;

/// Store identifiers are UUID strings assigned when a record is first seeded.
pub(crate) fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
