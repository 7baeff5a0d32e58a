//! Async listing
//!
//! Runs the blocking listing on tokio's blocking pool so async callers are not
//! stalled by filesystem or archive reads.

use log::warn;
use std::time::Duration;
use tokio::task;
use tokio::time;

use crate::error::ListingError;
use crate::listing::operations::list;
use crate::listing::results::ListingResult;
use crate::location::Location;

/// Lists `location` on the blocking pool
pub async fn list_async(location: Location) -> Result<ListingResult, ListingError> {
    let description = location.to_string();
    task::spawn_blocking(move || list(&location))
        .await
        .map_err(|e| ListingError::Interrupted {
            location: description,
            reason: e.to_string(),
        })?
}

/// Lists `location`, giving up after `limit`.
///
/// On expiry the blocking read still runs to completion; its result is dropped.
pub async fn list_with_timeout(
    location: Location,
    limit: Duration,
) -> Result<ListingResult, ListingError> {
    let description = location.to_string();
    match time::timeout(limit, list_async(location)).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Listing {} did not finish within {:?}", description, limit);
            Err(ListingError::TimedOut {
                location: description,
                after: limit,
            })
        }
    }
}
