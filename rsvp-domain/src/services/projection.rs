// Event projection rules
// Pure part of the NewEventCreated handler: metadata path, image URL and the
// mapping from decoded event + optional metadata to the Event entity.

use crate::entities::{Event, EventMetadata};
use crate::events::EventCreated;

pub const IPFS_GATEWAY_PREFIX: &str = "https://ipfs.io/ipfs";
pub const FALLBACK_IMAGE_URL: &str =
    "https://ipfs.io/ipfs/bafybeibssbrlptcefbqfh4vpw2wlmqfj2kgxt3nil4yujxbmdznau3t5wi/event.png";
pub const METADATA_FILE: &str = "data.json";

pub fn metadata_path(event_data_cid: &str) -> String {
    format!("{}/{}", event_data_cid, METADATA_FILE)
}

/// Plain concatenation of gateway prefix, CID and image path; no separator is
/// added, the image path carries its own.
pub fn image_url(event_data_cid: &str, image_path: Option<&str>) -> String {
    match image_path {
        Some(path) => format!("{}{}{}", IPFS_GATEWAY_PREFIX, event_data_cid, path),
        None => FALLBACK_IMAGE_URL.to_string(),
    }
}

pub fn project_new_event(created: &EventCreated, metadata: Option<&EventMetadata>) -> Event {
    let mut event = Event::from_created(created);
    match metadata {
        Some(meta) => {
            event.name = meta.name.clone();
            event.description = meta.description.clone();
            event.link = meta.link.clone();
            event.image_url = Some(image_url(&created.event_data_cid, meta.image.as_deref()));
        }
        None => {
            event.image_url = Some(FALLBACK_IMAGE_URL.to_string());
        }
    }
    event
}
