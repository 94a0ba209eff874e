// Copyright 2015-2018 Deyan Ginev. See the LICENSE
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A zeromq request-reply client for sending file payloads to a parsing server

#![deny(missing_docs)]

pub mod client;
pub mod helpers;
