use tokio::sync::{mpsc, oneshot, watch};

use crate::api::User;
use crate::config::SecureString;
use crate::session::store::{Session, SessionError, SessionStore};

const SESSION_BUFFER: usize = 16;

enum SessionCommand {
    SignIn {
        session: Session,
        respond_to: oneshot::Sender<Result<(), SessionError>>,
    },
    SignOut {
        respond_to: oneshot::Sender<Result<(), SessionError>>,
    },
    ReplaceUser {
        user: User,
        respond_to: oneshot::Sender<Result<(), SessionError>>,
    },
}

/// Sole writer of the session.
///
/// Owns the persisted store and applies commands one at a time; readers see
/// the result through a `watch` channel.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionCommand>,
    store: SessionStore,
    state: watch::Sender<Option<Session>>,
}

impl SessionActor {
    /// Load the persisted session and start the actor on the current runtime.
    pub fn spawn(store: SessionStore) -> SessionClient {
        let initial = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved session, starting signed out");
                None
            }
        };

        let (sender, receiver) = mpsc::channel(SESSION_BUFFER);
        let (state, observer) = watch::channel(initial);

        let actor = SessionActor {
            receiver,
            store,
            state,
        };
        tokio::spawn(actor.run());

        SessionClient {
            sender,
            state: observer,
        }
    }

    async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                SessionCommand::SignIn {
                    session,
                    respond_to,
                } => {
                    let result = self.persist(session.clone()).await.map(|()| {
                        tracing::info!(user_id = %session.user.id, "Signed in");
                        self.state.send_replace(Some(session));
                    });
                    if respond_to.send(result).is_err() {
                        tracing::trace!("Session: SignIn response dropped (receiver gone)");
                    }
                }
                SessionCommand::SignOut { respond_to } => {
                    let result = self.erase().await.map(|()| {
                        tracing::info!("Signed out");
                        self.state.send_replace(None);
                    });
                    if respond_to.send(result).is_err() {
                        tracing::trace!("Session: SignOut response dropped (receiver gone)");
                    }
                }
                SessionCommand::ReplaceUser { user, respond_to } => {
                    let result = self.replace_user(user).await;
                    if respond_to.send(result).is_err() {
                        tracing::trace!("Session: ReplaceUser response dropped (receiver gone)");
                    }
                }
            }
        }
        tracing::debug!("Session actor stopped");
    }

    async fn replace_user(&mut self, user: User) -> Result<(), SessionError> {
        let Some(current) = self.state.borrow().clone() else {
            tracing::debug!("Ignoring user refresh while signed out");
            return Ok(());
        };

        let updated = Session {
            token: current.token,
            user,
        };
        self.persist(updated.clone()).await?;
        self.state.send_replace(Some(updated));
        Ok(())
    }

    /// File I/O runs on the blocking pool, off the runtime workers.
    async fn persist(&self, session: Session) -> Result<(), SessionError> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.save(&session)).await?
    }

    async fn erase(&self) -> Result<(), SessionError> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.clear()).await?
    }
}

/// Cheap handle to the session: reads are local, writes go to the actor.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionCommand>,
    state: watch::Receiver<Option<Session>>,
}

impl SessionClient {
    pub fn current(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<SecureString> {
        self.state.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Receiver that is notified on every sign-in, sign-out and user refresh.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.clone()
    }

    pub async fn sign_in(&self, session: Session) -> Result<(), SessionError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(SessionCommand::SignIn {
            session,
            respond_to,
        })
        .await?;
        receiver.await.map_err(|_| SessionError::Disconnected)?
    }

    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(SessionCommand::SignOut { respond_to }).await?;
        receiver.await.map_err(|_| SessionError::Disconnected)?
    }

    /// Swap in a freshly fetched user record, keeping the token.
    pub async fn replace_user(&self, user: User) -> Result<(), SessionError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(SessionCommand::ReplaceUser { user, respond_to })
            .await?;
        receiver.await.map_err(|_| SessionError::Disconnected)?
    }

    async fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| SessionError::Disconnected)
    }
}
