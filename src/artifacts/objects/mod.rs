//! Git object types read from the object store
//!
//! Only two pieces of the object model matter for history reconstruction:
//!
//! - **ObjectId**: the content hash naming an object
//! - **Commit**: the parent pointer and committer timestamp of a commit
//!
//! Loose objects carry a `<type> <size>\0` header in front of their content;
//! `object_type` parses it.

pub mod commit;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated hash shown in graph labels and log lines
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
