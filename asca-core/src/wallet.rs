//! Wallet-session state machine.
//!
//! The external wallet-connect capability is an opaque async handshake; this
//! controller only tracks its lifecycle. `Connecting` is the in-flight
//! substate: while it is active a second connect request is a no-op, so a
//! slow handshake can never produce two concurrent sessions.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Owner of the wallet connection status.
///
/// Transitions happen only through the methods below; consumers observe the
/// committed state through [`WalletSession::is_connected`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSession {
    state: ConnectionState,
}

impl WalletSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected)
    }

    #[must_use]
    pub const fn is_connecting(&self) -> bool {
        matches!(self.state, ConnectionState::Connecting)
    }

    /// Request a connection. Returns `true` when the external handshake
    /// should actually be started; `false` while one is already in flight
    /// or the session is already connected.
    pub fn begin_connect(&mut self) -> bool {
        match self.state {
            ConnectionState::Disconnected => {
                self.state = ConnectionState::Connecting;
                true
            }
            ConnectionState::Connecting | ConnectionState::Connected => false,
        }
    }

    /// Commit a successful handshake.
    ///
    /// A completion that arrives after an intervening [`disconnect`] is
    /// stale and ignored.
    ///
    /// [`disconnect`]: WalletSession::disconnect
    pub fn complete_connect(&mut self) {
        match self.state {
            ConnectionState::Connecting => self.state = ConnectionState::Connected,
            ConnectionState::Disconnected | ConnectionState::Connected => {
                log::debug!("ignoring stale wallet handshake completion");
            }
        }
    }

    /// Record a failed or cancelled handshake. The failure is swallowed:
    /// the session returns to `Disconnected` and the user can retry.
    pub fn fail_connect(&mut self, reason: &str) {
        if self.state == ConnectionState::Connecting {
            log::warn!("wallet connection failed: {reason}");
        }
        self.state = ConnectionState::Disconnected;
    }

    /// Drop the session unconditionally. Idempotent.
    pub fn disconnect(&mut self) {
        self.state = ConnectionState::Disconnected;
    }
}
