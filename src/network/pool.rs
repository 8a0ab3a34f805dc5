//! Pool-backed command issuing
//!
//! Each command borrows one connection from the pool and hands it back when
//! done. The hand-back lives in `Drop` so it also happens when issuing fails
//! or panics.

use tracing::{debug, trace, warn};

use super::Doer;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::protocol::{Arg, RespFrame};

/// A source of connections
pub trait Pool {
    type Conn: Doer;

    /// Borrow a connection
    fn acquire(&self) -> ClientResult<Self::Conn>;

    /// Return a borrowed connection
    fn release(&self, conn: Self::Conn);
}

/// A connection borrowed from a pool, returned when dropped
pub struct PooledConnection<'a, P: Pool + ?Sized> {
    pool: &'a P,
    conn: Option<P::Conn>,
}

impl<'a, P: Pool + ?Sized> PooledConnection<'a, P> {
    pub fn acquire(pool: &'a P) -> ClientResult<Self> {
        let conn = pool.acquire()?;
        trace!("acquired pooled connection");
        Ok(PooledConnection {
            pool,
            conn: Some(conn),
        })
    }
}

impl<P: Pool + ?Sized> Doer for PooledConnection<'_, P> {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        match self.conn.as_mut() {
            Some(conn) => conn.issue(command, args),
            None => Err(ClientError::Pool("connection already released".to_string())),
        }
    }
}

impl<P: Pool + ?Sized> Drop for PooledConnection<'_, P> {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            self.pool.release(conn);
            trace!("released pooled connection");
        }
    }
}

/// Issues each command on a connection borrowed from `P`
#[derive(Debug)]
pub struct PoolDoer<P> {
    pool: P,
    log_commands: bool,
}

impl<P: Pool> PoolDoer<P> {
    pub fn new(pool: P) -> Self {
        PoolDoer {
            pool,
            log_commands: false,
        }
    }

    pub fn with_config(pool: P, config: &Config) -> Self {
        PoolDoer {
            pool,
            log_commands: config.log_commands,
        }
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn into_pool(self) -> P {
        self.pool
    }

    fn issue_pooled(&self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        if self.log_commands {
            let args: Vec<String> = args.iter().map(Arg::to_string).collect();
            debug!(command, args = ?args, "issuing command");
        }

        let mut conn = PooledConnection::acquire(&self.pool).map_err(|e| {
            warn!(command, error = %e, "failed to acquire pooled connection");
            e
        })?;
        conn.issue(command, args)
    }
}

impl<P: Pool> Doer for PoolDoer<P> {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        self.issue_pooled(command, args)
    }
}

impl<P: Pool> Doer for &PoolDoer<P> {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        self.issue_pooled(command, args)
    }
}
