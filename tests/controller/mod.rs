//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and
//! bodies for success and failure paths.

mod skill_test;
mod test_result;
mod user;

use skillboard::server::model::app::AppState;
use skillboard_test_utils::prelude::*;

use crate::util::body_json;
