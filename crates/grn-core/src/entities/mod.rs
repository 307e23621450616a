//! Entity structs for all Greenroom domain objects.
//!
//! A [`Project`] is a point-in-time snapshot of the scheduling board:
//! rooms, slots, the repository label catalog, and the session issues with
//! their placements. Everything downstream (parsing, validation, label
//! reconciliation) works off this snapshot. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema export.

mod chair;
mod description;
mod issue;
mod project;
mod session;

pub use chair::{Chair, ChairDeclaration, ChairIdentity, RegistryIdentity};
pub use description::SessionDescription;
pub use issue::ValidationIssue;
pub use project::{Label, Project, ProjectMetadata, Room, Slot};
pub use session::{Account, Session};
