//! End-to-end tests: providers → engine → board → storage → dashboard.

mod mock_feed;
mod pipeline;
