//! Stack-based JSON assembly.
//!
//! [`ResponseBuilder`] produces a single [`serde_json::Value`] through a
//! sequence of `key` / `value` / `start_*` / `end_*` calls.  Every call is
//! checked against the current [`BuilderState`]; a misplaced call returns
//! [`JsonError::MalformedOutput`] instead of producing half-formed JSON.
//!
//! ```
//! use serde_json::json;
//! use tc_json::ResponseBuilder;
//!
//! let mut b = ResponseBuilder::new();
//! b.start_object()?
//!     .key("request_id")?.value(1)?
//!     .key("buses")?.start_array()?.value("14")?.end_array()?
//!     .end_object()?;
//! assert_eq!(b.build()?, json!({ "request_id": 1, "buses": ["14"] }));
//! # Ok::<(), tc_json::JsonError>(())
//! ```

use serde_json::{Map, Value};

use crate::{JsonError, JsonResult};

/// What the builder will accept next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing written yet; any value or container may start.
    ExpectValue,
    /// Inside an array: a value, a nested container, or `end_array`.
    InArray,
    /// Inside an object: a key or `end_object`.
    InObjectExpectKey,
    /// Inside an object after `key`: a value or a nested container.
    InObjectExpectValue,
    /// A complete root value exists; only `build` is allowed.
    Complete,
}

enum Frame {
    Array(Vec<Value>),
    Object { map: Map<String, Value>, pending_key: Option<String> },
}

#[derive(Default)]
pub struct ResponseBuilder {
    stack: Vec<Frame>,
    root:  Option<Value>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BuilderState {
        match self.stack.last() {
            None if self.root.is_some() => BuilderState::Complete,
            None => BuilderState::ExpectValue,
            Some(Frame::Array(_)) => BuilderState::InArray,
            Some(Frame::Object { pending_key: None, .. }) => BuilderState::InObjectExpectKey,
            Some(Frame::Object { pending_key: Some(_), .. }) => BuilderState::InObjectExpectValue,
        }
    }

    pub fn key(&mut self, key: impl Into<String>) -> JsonResult<&mut Self> {
        match self.stack.last_mut() {
            Some(Frame::Object { pending_key: slot @ None, .. }) => {
                *slot = Some(key.into());
                Ok(self)
            }
            _ => Err(misuse("key", self.state())),
        }
    }

    pub fn value(&mut self, value: impl Into<Value>) -> JsonResult<&mut Self> {
        self.put("value", value.into())?;
        Ok(self)
    }

    pub fn start_object(&mut self) -> JsonResult<&mut Self> {
        self.check_value_slot("start_object")?;
        self.stack.push(Frame::Object { map: Map::new(), pending_key: None });
        Ok(self)
    }

    pub fn start_array(&mut self) -> JsonResult<&mut Self> {
        self.check_value_slot("start_array")?;
        self.stack.push(Frame::Array(Vec::new()));
        Ok(self)
    }

    pub fn end_object(&mut self) -> JsonResult<&mut Self> {
        match self.stack.pop() {
            Some(Frame::Object { map, pending_key: None }) => {
                self.put("end_object", Value::Object(map))?;
                Ok(self)
            }
            Some(frame) => {
                self.stack.push(frame);
                Err(misuse("end_object", self.state()))
            }
            None => Err(misuse("end_object", self.state())),
        }
    }

    pub fn end_array(&mut self) -> JsonResult<&mut Self> {
        match self.stack.pop() {
            Some(Frame::Array(items)) => {
                self.put("end_array", Value::Array(items))?;
                Ok(self)
            }
            Some(frame) => {
                self.stack.push(frame);
                Err(misuse("end_array", self.state()))
            }
            None => Err(misuse("end_array", self.state())),
        }
    }

    /// The finished document.  Fails while any container is still open or
    /// before anything was written.
    pub fn build(self) -> JsonResult<Value> {
        match (self.stack.is_empty(), self.root) {
            (true, Some(root)) => Ok(root),
            (false, _) => Err(JsonError::MalformedOutput(format!(
                "build with {} unclosed container(s)",
                self.stack.len()
            ))),
            (true, None) => Err(JsonError::MalformedOutput("build on an empty document".into())),
        }
    }

    fn check_value_slot(&self, op: &str) -> JsonResult<()> {
        match self.state() {
            BuilderState::ExpectValue
            | BuilderState::InArray
            | BuilderState::InObjectExpectValue => Ok(()),
            state => Err(misuse(op, state)),
        }
    }

    /// Place a finished value wherever the current state expects one.
    fn put(&mut self, op: &str, value: Value) -> JsonResult<()> {
        match self.stack.last_mut() {
            None if self.root.is_none() => {
                self.root = Some(value);
                Ok(())
            }
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
            Some(Frame::Object { map, pending_key }) => match pending_key.take() {
                Some(key) => {
                    map.insert(key, value);
                    Ok(())
                }
                None => Err(misuse(op, BuilderState::InObjectExpectKey)),
            },
            None => Err(misuse(op, BuilderState::Complete)),
        }
    }
}

fn misuse(op: &str, state: BuilderState) -> JsonError {
    JsonError::MalformedOutput(format!("{op} not allowed in state {state:?}"))
}
