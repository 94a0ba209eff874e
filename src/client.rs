// Copyright 2015-2018 Deyan Ginev. See the LICENSE
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Request-reply client for dispatching a file payload to a parsing server

use std::error::Error;
use std::path::Path;
use time;

use crate::helpers;

/// Specifies the connection parameters for a request-reply parser client
pub struct ParserClient {
  /// full URL (including port) to the parsing server endpoint
  pub address: String,
}

impl Default for ParserClient {
  fn default() -> ParserClient {
    ParserClient {
      address: "tcp://localhost:5555".to_string(),
    }
  }
}

impl ParserClient {
  /// Loads the file at the given path and performs a single request-reply round
  /// trip with its contents. File access errors surface before any socket is
  /// created, so no connection is attempted for an unreadable payload.
  pub fn dispatch_file(&self, path: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    let payload = helpers::load_payload(path)?;
    let request_time = time::get_time();
    let reply = self.round_trip(&payload)?;
    let responded_time = time::get_time();
    let request_duration = (responded_time - request_time).num_milliseconds();
    eprintln!(
      "Request of {} bytes answered in {}ms.",
      payload.len(),
      request_duration
    );
    Ok(reply)
  }

  /// Sends the payload as a single opaque message and blocks until exactly one
  /// reply message arrives on the same socket. There is no receive timeout, so
  /// an unresponsive server blocks the caller indefinitely.
  pub fn round_trip(&self, payload: &[u8]) -> Result<Vec<u8>, Box<dyn Error>> {
    let context = zmq::Context::new();
    let requester = context.socket(zmq::REQ)?;
    requester.connect(&self.address)?;

    requester.send(payload, 0)?;
    let mut msg = zmq::Message::new();
    requester.recv(&mut msg, 0)?;
    // requester and context drop at scope end, releasing the transport on
    // error paths as well
    Ok(msg.to_vec())
  }
}
