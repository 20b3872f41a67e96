
use skillboard_test_utils::prelude::*;
