//! Project repository trait.

use super::model::Project;
use crate::collection::RemoteCollection;

/// The remote project collection backing the dashboard.
///
/// Anything that serves projects as a [`RemoteCollection`] qualifies; the
/// HTTP implementation lives in the interaction crate.
pub trait ProjectRepository: RemoteCollection<Item = Project> {}

impl<T> ProjectRepository for T where T: RemoteCollection<Item = Project> {}
