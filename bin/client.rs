// Copyright 2015-2018 Deyan Ginev. See the LICENSE
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed
// except according to those terms.

use parser_client::client::ParserClient;
use parser_client::helpers;
use std::env;
use std::path::Path;
use std::process;

/// A zeromq client executable that sends a single file payload to a parsing
/// server and prints the server's reply
fn main() {
  let args: Vec<String> = env::args().collect();
  let (address, filename) = match helpers::parse_args(&args) {
    Some(pair) => pair,
    None => {
      eprintln!("Usage: client <address> <filename>");
      process::exit(1);
    },
  };

  eprintln!("Sending contents of {} to {}", filename, address);
  let client = ParserClient { address };
  let reply = client
    .dispatch_file(Path::new(&filename))
    .unwrap_or_else(|e| panic!("Failed to complete the parse request: {:?}", e));
  println!("{}", String::from_utf8_lossy(&reply));
}
