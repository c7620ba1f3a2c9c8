use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a client with an overall request timeout.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}
