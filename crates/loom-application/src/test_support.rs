//! In-memory doubles for the core traits, shared by the controller tests.

use async_trait::async_trait;
use loom_core::auth::{AuthGateway, AuthGrant, Credentials};
use loom_core::collection::RemoteCollection;
use loom_core::error::{LoomError, Result};
use loom_core::navigation::{Confirm, Navigator, Route};
use loom_core::project::Project;
use loom_core::session::{Session, SessionRepository};
use loom_core::user::{UserIdentity, UserRef};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// ============================================================================
// Session storage
// ============================================================================

pub struct MockSessionRepository {
    stored: Mutex<Option<Session>>,
    fail_writes: bool,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(None),
            fail_writes: false,
        }
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            stored: Mutex::new(Some(session)),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            stored: Mutex::new(None),
            fail_writes: true,
        }
    }

    pub fn stored(&self) -> Option<Session> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        Ok(self.stored())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        if self.fail_writes {
            return Err(LoomError::io("disk full"));
        }
        *self.stored.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.fail_writes {
            return Err(LoomError::io("read-only file system"));
        }
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

// ============================================================================
// Auth gateway
// ============================================================================

pub struct MockAuthGateway {
    response: Result<AuthGrant>,
    calls: AtomicUsize,
    last_credentials: Mutex<Option<Credentials>>,
}

impl MockAuthGateway {
    pub fn granting(token: &str, email: &str) -> Self {
        Self::responding(Ok(AuthGrant {
            token: token.to_string(),
            user: UserIdentity::with_email(email),
        }))
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self::responding(Err(LoomError::server(status, message.map(str::to_string))))
    }

    pub fn responding(response: Result<AuthGrant>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last_credentials.lock().unwrap().clone()
    }

    fn respond(&self, credentials: &Credentials) -> Result<AuthGrant> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock().unwrap() = Some(credentials.clone());
        self.response.clone()
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant> {
        self.respond(credentials)
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthGrant> {
        self.respond(credentials)
    }
}

// ============================================================================
// Project collection
// ============================================================================

pub fn project(id: &str, name: &str, collaborators: usize) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        users: (0..collaborators)
            .map(|i| UserRef::Id(format!("u{i}")))
            .collect(),
    }
}

/// A server-side project list with switchable failures.
pub struct MockProjects {
    server: Mutex<Vec<Project>>,
    next_id: AtomicUsize,
    pub fail_fetch: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fetch_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl MockProjects {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            server: Mutex::new(projects),
            next_id: AtomicUsize::new(100),
            fail_fetch: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            fetch_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn server_items(&self) -> Vec<Project> {
        self.server.lock().unwrap().clone()
    }

    pub fn set_server_items(&self, projects: Vec<Project>) {
        *self.server.lock().unwrap() = projects;
    }
}

#[async_trait]
impl RemoteCollection for MockProjects {
    type Item = Project;

    async fn fetch_all(&self) -> Result<Vec<Project>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(LoomError::server(500, None));
        }
        Ok(self.server_items())
    }

    async fn create(&self, name: &str) -> Result<Project> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(LoomError::network("connection reset"));
        }
        let id = format!("p{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        // The server adds the creator as the first collaborator.
        let created = project(&id, name, 1);
        self.server.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(LoomError::server(403, Some("Forbidden".to_string())));
        }
        self.server.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

// ============================================================================
// Front-end hooks
// ============================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub struct FixedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl FixedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
