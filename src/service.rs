// SPDX-License-Identifier: MPL-2.0
//! Async driver for a [`ToastCenter`].
//!
//! The service owns its center on a single tokio task and maps real
//! monotonic time onto the center's logical clock. Other tasks send
//! commands through a [`ToastHandle`] and watch render snapshots.
//!
//! ```no_run
//! # async fn demo() {
//! use toast_lens::config::ToastConfig;
//! use toast_lens::notifications::ToastRequest;
//! use toast_lens::service::ToastService;
//!
//! let (handle, _task) = ToastService::spawn(&ToastConfig::default());
//! handle.add_toast(ToastRequest::error("Upload failed").with_duration_ms(5000));
//!
//! let mut snapshots = handle.subscribe();
//! while snapshots.changed().await.is_ok() {
//!     let toasts = snapshots.borrow().clone();
//!     println!("{} toasts on screen", toasts.len());
//! }
//! # }
//! ```

use crate::config::ToastConfig;
use crate::domain::toast::ToastId;
use crate::notifications::{Message, ToastCenter, ToastRequest, ToastView};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

#[derive(Debug)]
enum Command {
    Add(ToastRequest),
    Message(Message),
    DismissAll,
}

/// Cheap, cloneable handle to a running [`ToastService`].
///
/// Commands sent after the service stopped are dropped silently.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Vec<ToastView>>,
}

impl ToastHandle {
    pub fn add_toast(&self, request: ToastRequest) {
        self.send(Command::Add(request));
    }

    pub fn remove_toast(&self, id: ToastId) {
        self.send(Command::Message(Message::Remove(id)));
    }

    pub fn pointer_entered(&self, id: ToastId) {
        self.send(Command::Message(Message::PointerEntered(id)));
    }

    pub fn pointer_left(&self, id: ToastId) {
        self.send(Command::Message(Message::PointerLeft(id)));
    }

    pub fn close(&self, id: ToastId) {
        self.send(Command::Message(Message::Close(id)));
    }

    pub fn dismiss_all(&self) {
        self.send(Command::DismissAll);
    }

    /// Latest published toasts, in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ToastView> {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified whenever the visible toasts change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<ToastView>> {
        self.snapshots.clone()
    }

    fn send(&self, command: Command) {
        if let Err(err) = self.commands.send(command) {
            tracing::debug!(command = ?err.0, "toast service stopped, command dropped");
        }
    }
}

/// Task that owns a [`ToastCenter`] and keeps it in step with real time.
#[derive(Debug)]
pub struct ToastService {
    center: ToastCenter,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Vec<ToastView>>,
    origin: Instant,
    base: Duration,
}

impl ToastService {
    /// Spawns a service with a fresh center built from `config`.
    ///
    /// Must be called from within a tokio runtime. The task ends once every
    /// [`ToastHandle`] has been dropped.
    pub fn spawn(config: &ToastConfig) -> (ToastHandle, JoinHandle<()>) {
        Self::spawn_with(ToastCenter::from_config(config))
    }

    /// Spawns a service around an existing center.
    pub fn spawn_with(center: ToastCenter) -> (ToastHandle, JoinHandle<()>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(center.toasts());
        let service = Self {
            base: center.now(),
            center,
            commands: command_rx,
            snapshots: snapshot_tx,
            origin: Instant::now(),
        };
        let task = tokio::spawn(service.run());
        let handle = ToastHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        (handle, task)
    }

    async fn run(mut self) {
        tracing::debug!("toast service started");
        loop {
            let wakeup = self.center.next_wakeup().map(|at| self.instant_for(at));
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    self.sync_clock();
                    self.apply(command);
                }
                () = sleep_until(wakeup) => self.sync_clock(),
            }
            self.publish();
        }
        tracing::debug!("toast service stopped");
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Add(request) => self.center.add_toast(request),
            Command::Message(message) => self.center.handle_message(&message),
            Command::DismissAll => self.center.dismiss_all(),
        }
    }

    fn sync_clock(&mut self) {
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        self.center.advance_to(self.base.saturating_add(elapsed));
    }

    fn instant_for(&self, logical: Duration) -> Instant {
        self.origin + logical.saturating_sub(self.base)
    }

    fn publish(&mut self) {
        let next = self.center.toasts();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
