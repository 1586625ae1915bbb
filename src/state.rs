// src/state.rs
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::models::{event::Event, user::User};

// Todo o estado vive em memória: as coleções voltam aos dados de seed
// a cada reinício do processo. Usamos Arc<RwLock<...>> para acesso seguro
// a partir dos handlers (um único lock por coleção).

/// Handle para a coleção de eventos.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    eventos: Arc<RwLock<Vec<Event>>>,
}

impl EventStore {
    pub fn seeded(eventos: Vec<Event>) -> Self {
        EventStore {
            eventos: Arc::new(RwLock::new(eventos)),
        }
    }

    /// Cópia da coleção no estado atual (para filtros e listagens).
    pub async fn snapshot(&self) -> Vec<Event> {
        self.eventos.read().await.clone()
    }

    /// Acesso exclusivo de escrita (usado pelo event_service).
    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Vec<Event>> {
        self.eventos.write().await
    }
}

/// Handle para a coleção de usuários.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    usuarios: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn seeded(usuarios: Vec<User>) -> Self {
        UserStore {
            usuarios: Arc::new(RwLock::new(usuarios)),
        }
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.usuarios.read().await.clone()
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.usuarios.write().await
    }
}

/// Estado compartilhado da aplicação.
#[derive(Clone)]
pub struct AppState {
    pub events: EventStore,
    pub users: UserStore,
}

// Permite extrair cada store diretamente nos handlers
impl axum::extract::FromRef<AppState> for EventStore {
    fn from_ref(state: &AppState) -> EventStore {
        state.events.clone()
    }
}

impl axum::extract::FromRef<AppState> for UserStore {
    fn from_ref(state: &AppState) -> UserStore {
        state.users.clone()
    }
}
