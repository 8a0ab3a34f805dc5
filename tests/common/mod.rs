//! Test doubles standing in for a real connection

#![allow(dead_code)]

use std::collections::HashMap;

use ferrous_typed::{Arg, ClientError, ClientResult, Doer, RespFrame, Sender};

type Call = (String, Vec<Arg>);

/// Connection that answers registered commands with canned replies and
/// records everything it is asked to do.
#[derive(Debug, Default, Clone)]
pub struct MockConn {
    replies: HashMap<Call, Result<RespFrame, ClientError>>,
    calls: Vec<Call>,
    sent: Vec<Call>,
}

impl MockConn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reply for a command with exactly these arguments
    pub fn expect(
        &mut self,
        command: &str,
        args: &[Arg],
        reply: Result<RespFrame, ClientError>,
    ) -> &mut Self {
        self.replies.insert((command.to_string(), args.to_vec()), reply);
        self
    }

    /// How many times the command was issued with these arguments
    pub fn stats(&self, command: &str, args: &[Arg]) -> usize {
        self.calls
            .iter()
            .filter(|(c, a)| c == command && a.as_slice() == args)
            .count()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn sent(&self) -> &[Call] {
        &self.sent
    }
}

impl Doer for MockConn {
    fn issue(&mut self, command: &str, args: &[Arg]) -> ClientResult<RespFrame> {
        let call = (command.to_string(), args.to_vec());
        self.calls.push(call.clone());
        match self.replies.get(&call) {
            Some(reply) => reply.clone(),
            None => Err(ClientError::Protocol(format!(
                "unexpected command {} {:?}",
                command, args
            ))),
        }
    }
}

impl Sender for MockConn {
    fn enqueue(&mut self, command: &str, args: &[Arg]) -> ClientResult<()> {
        self.sent.push((command.to_string(), args.to_vec()));
        Ok(())
    }
}

pub fn args(items: &[&str]) -> Vec<Arg> {
    items.iter().map(|item| Arg::from(*item)).collect()
}
