//! JSON response envelopes.
//!
//! Success: `{"code":200,"data":…,"msg":""}`.
//! Failure: `{"code":500,"msg":"…"}` sent with HTTP 200, the way the
//! frontend expects application-level errors.

use serde::Serialize;

use crate::log;
use crate::server::reply::Reply;

#[derive(Debug, Serialize)]
struct Success<'a, T> {
    code: u16,
    data: &'a T,
    msg: &'static str,
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    code: u16,
    msg: &'a str,
}

/// Wrap `data` in the success envelope.
pub fn ok<T: Serialize>(data: &T) -> Reply {
    encode(&Success {
        code: 200,
        data,
        msg: "",
    })
}

/// Application-level failure payload.
pub fn fail(msg: &str) -> Reply {
    encode(&Failure { code: 500, msg })
}

fn encode<T: Serialize>(value: &T) -> Reply {
    match serde_json::to_vec(value) {
        Ok(body) => Reply::json(200, body),
        Err(e) => {
            log!("error"; "failed to encode response: {}", e);
            Reply::text(500, "failed to encode response")
        }
    }
}
