// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount errors.

use wasm_bindgen::JsValue;

use crate::media::describe;

/// The player could not be built or mounted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// There is no global `window` (not running in a browser page).
    #[error("no window object available")]
    MissingWindow,
    /// The window or element has no owning document.
    #[error("no document available")]
    MissingDocument,
    /// The document has no `<body>`.
    #[error("document has no body")]
    MissingBody,
    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(describe(&value))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}
