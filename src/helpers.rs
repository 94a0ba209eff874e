// Copyright 2015-2018 Deyan Ginev. See the LICENSE
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Helper methods for payload loading and argument validation

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/// Reads the entire file at the given path into memory, as a single opaque payload.
/// The payload length always equals the file size in bytes.
pub fn load_payload(path: &Path) -> Result<Vec<u8>, io::Error> {
  let mut file = File::open(path)?;
  let mut payload = Vec::new();
  file.read_to_end(&mut payload)?;
  Ok(payload)
}

/// Extracts the server address and payload filename from the raw process
/// arguments (program name included), requiring exactly two positionals
pub fn parse_args(args: &[String]) -> Option<(String, String)> {
  if args.len() != 3 {
    return None;
  }
  Some((args[1].clone(), args[2].clone()))
}
